//! Custom rule documents.
//!
//! Deployments add store conventions without recompiling by shipping a JSON
//! document:
//!
//! ```json
//! {
//!   "defaults": [
//!     { "pattern": "(?i)^.*\\bkefir\\b.*$", "regex": true, "replacement": "Kefir", "category": "Dairy" }
//!   ],
//!   "stores": {
//!     "METRO": [ { "pattern": "ΚΑΣΕΡΙ", "replacement": "Kasseri", "category": "Dairy" } ]
//!   }
//! }
//! ```
//!
//! List order is preserved; it is the matching order.

use crate::engine::RuleSet;
use crate::{Error, NormalizationRule, Pattern, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// One rule as written in a rule document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub pattern: String,
    /// Treat `pattern` as a regular expression instead of a literal substring.
    #[serde(default)]
    pub regex: bool,
    pub replacement: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Top-level shape of a rule document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleFile {
    #[serde(default)]
    pub defaults: Vec<RuleSpec>,
    #[serde(default)]
    pub stores: BTreeMap<String, Vec<RuleSpec>>,
}

impl TryFrom<RuleSpec> for NormalizationRule {
    type Error = Error;

    fn try_from(spec: RuleSpec) -> Result<Self> {
        let pattern = if spec.regex { Pattern::regex(&spec.pattern)? } else { Pattern::literal(&spec.pattern)? };
        Ok(NormalizationRule { pattern, replacement: spec.replacement, category: spec.category })
    }
}

fn compile(specs: Vec<RuleSpec>) -> Result<Vec<NormalizationRule>> {
    specs.into_iter().map(NormalizationRule::try_from).collect()
}

impl TryFrom<RuleFile> for RuleSet {
    type Error = Error;

    fn try_from(file: RuleFile) -> Result<Self> {
        let mut set = RuleSet::new(compile(file.defaults)?);
        for (store, specs) in file.stores {
            if store.trim().is_empty() {
                return Err(Error::EmptyStore);
            }
            set.insert_store(&store, compile(specs)?);
        }
        Ok(set)
    }
}

impl RuleSet {
    /// Parse and compile a rule document.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RuleFile = serde_json::from_str(json)?;
        let set = RuleSet::try_from(file)?;
        debug!(rules = set.len(), stores = set.stores().len(), "loaded rule document");
        Ok(set)
    }

    /// Read and compile a rule document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }
}
