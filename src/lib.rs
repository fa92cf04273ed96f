//! Rule-based normalization of grocery receipt item names.
//!
//! Receipt lines coming out of OCR are noisy: store-specific abbreviations,
//! quantity multipliers, prices, Greek and Latin script mixed together. This
//! crate turns such a line into a canonical product name, a category, a list
//! of qualifiers ("organic", "fresh", ...) and a heuristic confidence.
//!
//! ```
//! let res = larder::normalize_item_name("ΜΠΑΝΑΝΕΣ", Some("ALPHAMEGA"));
//! assert_eq!(res.normalized_name, "Bananas");
//! assert_eq!(res.category.as_deref(), Some("Fruits"));
//! ```

extern crate self as larder;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod config;
mod engine;
mod error;
mod rules;

pub use api::{
    Context, FallbackPolicy, NormalizationDetails, NormalizationResult, NormalizationVerbose, Normalizer, Options,
    normalize, normalize_item_name, normalize_verbose_with, normalize_with,
};
pub use config::{RuleFile, RuleSpec};
pub use engine::{
    ModifierExtraction, RuleOutcome, RuleSet, RuleSource, Stages, StageMetrics, apply_rules, build_description,
    confidence, contains_greek, extract_modifiers, preprocess, transliterate_greek,
};
pub use error::{Error, Result};

// --- Rule types -------------------------------------------------------------

/// What a [`NormalizationRule`] tests a candidate name against.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Case-sensitive substring containment.
    Literal(String),
    /// Regular expression; the replacement may use `$1`-style back-references.
    Regex(Regex),
}

impl Pattern {
    /// Compile a regex pattern, reporting the offending source on failure.
    pub fn regex(source: &str) -> Result<Self> {
        if source.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Regex::new(source)
            .map(Pattern::Regex)
            .map_err(|source_err| Error::InvalidPattern { pattern: source.to_string(), source: source_err })
    }

    pub fn literal(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Pattern::Literal(text.to_string()))
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        match self {
            Pattern::Literal(text) => candidate.contains(text.as_str()),
            Pattern::Regex(re) => re.is_match(candidate),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Literal(text) => text,
            Pattern::Regex(re) => re.as_str(),
        }
    }
}

/// A single pattern → canonical name mapping.
///
/// Rules live in ordered lists; the first rule whose pattern matches wins.
#[derive(Debug, Clone)]
pub struct NormalizationRule {
    pub pattern: Pattern,
    pub replacement: String,
    pub category: Option<String>,
}

impl NormalizationRule {
    pub fn new(pattern: Pattern, replacement: impl Into<String>, category: Option<&str>) -> Self {
        NormalizationRule { pattern, replacement: replacement.into(), category: category.map(str::to_string) }
    }

    /// Substitute the first match of this rule in `candidate`.
    ///
    /// Returns `None` when the pattern does not match.
    pub fn apply(&self, candidate: &str) -> Option<String> {
        engine::substitute_first(&self.pattern, candidate, &self.replacement)
    }
}

/// A qualifier recognizer ("organic", "gluten-free", ...). Purely descriptive.
#[derive(Debug, Clone, Copy)]
pub struct ModifierPattern {
    pub label: &'static str,
    pub regex: &'static Regex,
}
