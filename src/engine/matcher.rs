//! First-match-wins rule dispatch.
//!
//! Two entry points with slightly different contracts:
//!
//! - [`apply_rules`] is the self-contained matcher: store rules, and only if
//!   none of them matches, default rules.
//! - [`match_with_fallback`] is what the pipeline uses. It decides whether to
//!   consult the default rules according to a [`FallbackPolicy`]. Under the
//!   default `NameChanged` policy a store rule that matches but leaves the name
//!   untouched counts as "no match", and the default rules run on the same
//!   input.

use super::RuleSet;
use crate::{FallbackPolicy, NormalizationRule};
use serde::Serialize;
use tracing::debug;

/// Where a normalized name came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "store", rename_all = "lowercase")]
pub enum RuleSource {
    /// A rule from the named store's list (canonical store key).
    Store(String),
    /// A rule from the default list.
    Default,
    /// Nothing matched; the name passed through.
    Unmatched,
}

/// Output of rule matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub normalized_name: String,
    pub category: Option<String>,
    pub source: RuleSource,
    /// Position of the winning rule inside its list.
    pub rule_index: Option<usize>,
}

impl RuleOutcome {
    fn unmatched(name: &str) -> Self {
        RuleOutcome { normalized_name: name.to_string(), category: None, source: RuleSource::Unmatched, rule_index: None }
    }

    pub fn is_match(&self) -> bool {
        self.source != RuleSource::Unmatched
    }
}

fn first_match<'r>(rules: &'r [NormalizationRule], name: &str) -> Option<(usize, &'r NormalizationRule, String)> {
    rules.iter().enumerate().find_map(|(idx, rule)| rule.apply(name).map(|replaced| (idx, rule, replaced)))
}

fn outcome_from(rules: &[NormalizationRule], name: &str, source: RuleSource) -> RuleOutcome {
    match first_match(rules, name) {
        Some((idx, rule, replaced)) => RuleOutcome {
            normalized_name: replaced,
            category: rule.category.clone(),
            source,
            rule_index: Some(idx),
        },
        None => RuleOutcome::unmatched(name),
    }
}

/// Try only the rules registered for `store`.
pub(crate) fn apply_store_rules(rules: &RuleSet, name: &str, store: &str) -> RuleOutcome {
    match rules.store_rules(store) {
        Some(list) => outcome_from(list, name, RuleSource::Store(super::store_key(store))),
        None => RuleOutcome::unmatched(name),
    }
}

/// Try only the default rules.
pub(crate) fn apply_default_rules(rules: &RuleSet, name: &str) -> RuleOutcome {
    outcome_from(rules.defaults(), name, RuleSource::Default)
}

/// Match `name` against the store's rules, then the default rules.
///
/// The first matching rule wins; a store match never consults the defaults.
/// With no match at all the name is returned unchanged and uncategorized.
pub fn apply_rules(rules: &RuleSet, name: &str, store: Option<&str>) -> RuleOutcome {
    if let Some(store) = store {
        let outcome = apply_store_rules(rules, name, store);
        if outcome.is_match() {
            return outcome;
        }
    }
    apply_default_rules(rules, name)
}

/// Store pass followed by a policy-controlled fallback to the default rules.
pub(crate) fn match_with_fallback(
    rules: &RuleSet,
    name: &str,
    store: Option<&str>,
    policy: FallbackPolicy,
) -> RuleOutcome {
    if let Some(store) = store {
        let outcome = apply_store_rules(rules, name, store);
        let keep = match policy {
            FallbackPolicy::NameChanged => outcome.normalized_name != name,
            FallbackPolicy::ExplicitMatch => outcome.is_match(),
        };
        if keep {
            debug!(store, rule = ?outcome.rule_index, category = ?outcome.category, "store rule matched");
            return outcome;
        }
        if outcome.is_match() {
            debug!(store, "store rule left the name unchanged, falling back to default rules");
        }
    }

    let outcome = apply_default_rules(rules, name);
    debug!(matched = outcome.is_match(), rule = ?outcome.rule_index, category = ?outcome.category, "default rules");
    outcome
}
