//! Rule set storage.
//!
//! A `RuleSet` is the *static* side of normalization: a default rule list and
//! one ordered list per store. It is built once (see `RuleSet::builtin`) and
//! then only read, so a single instance can be shared across threads.
//!
//! ## Invariants
//!
//! - Rule order inside every list is preserved exactly as declared; the
//!   matcher relies on it for first-match-wins dispatch.
//! - Store keys are stored in canonical form (`store_key`), so lookups are
//!   insensitive to case and surrounding whitespace.

use crate::NormalizationRule;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<RuleSet> = Lazy::new(|| {
    let mut set = RuleSet::new(crate::rules::defaults::get());
    for (store, rules) in crate::rules::stores::get() {
        set.insert_store(store, rules);
    }
    set
});

/// Canonical form of a store identifier.
pub(crate) fn store_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Default rules plus per-store overrides.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    defaults: Vec<NormalizationRule>,
    stores: HashMap<String, Vec<NormalizationRule>>,
}

impl RuleSet {
    /// A rule set with the given default rules and no store overrides.
    pub fn new(defaults: Vec<NormalizationRule>) -> Self {
        RuleSet { defaults, stores: HashMap::new() }
    }

    /// The built-in tables, constructed on first use.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    /// Append `rules` to the list for `store` (created if missing).
    pub fn insert_store(&mut self, store: &str, rules: Vec<NormalizationRule>) {
        self.stores.entry(store_key(store)).or_default().extend(rules);
    }

    /// Builder-style variant of [`RuleSet::insert_store`].
    pub fn with_store(mut self, store: &str, rules: Vec<NormalizationRule>) -> Self {
        self.insert_store(store, rules);
        self
    }

    /// Append `rules` after the current default rules.
    pub fn with_defaults(mut self, rules: Vec<NormalizationRule>) -> Self {
        self.defaults.extend(rules);
        self
    }

    pub fn defaults(&self) -> &[NormalizationRule] {
        &self.defaults
    }

    /// Rules registered for `store`, if any.
    pub fn store_rules(&self, store: &str) -> Option<&[NormalizationRule]> {
        self.stores.get(&store_key(store)).map(Vec::as_slice)
    }

    pub fn has_store(&self, store: &str) -> bool {
        self.stores.contains_key(&store_key(store))
    }

    /// Canonical names of all stores with rules, sorted.
    pub fn stores(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.stores.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of rules across the default list and every store list.
    pub fn len(&self) -> usize {
        self.defaults.len() + self.stores.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layer `self` over `base`: for every list, `self`'s rules come first and
    /// `base`'s rules follow, so custom rules win ties.
    pub fn merged_over(self, base: &RuleSet) -> RuleSet {
        let mut defaults = self.defaults;
        defaults.extend(base.defaults.iter().cloned());

        let mut stores = self.stores;
        for (store, rules) in &base.stores {
            stores.entry(store.clone()).or_default().extend(rules.iter().cloned());
        }

        RuleSet { defaults, stores }
    }
}
