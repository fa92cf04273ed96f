//! Qualifier extraction.
//!
//! Modifier patterns are applied one after another, each against the name as
//! left by the previous one. A pattern contributes at most one entry to
//! `modifiers` (its first matched substring, original casing kept) but every
//! occurrence is removed from the clean name.

use super::preprocess::collapse_whitespace;
use crate::rules::modifiers::MODIFIER_PATTERNS;
use tracing::trace;

/// Result of [`extract_modifiers`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModifierExtraction {
    /// Matched qualifier substrings, in pattern-list order.
    pub modifiers: Vec<String>,
    /// The name with every extracted qualifier removed.
    pub clean_name: String,
}

/// Pull qualifier terms out of `name`.
pub fn extract_modifiers(name: &str) -> ModifierExtraction {
    let mut modifiers = Vec::new();
    let mut clean = name.to_string();

    for pattern in MODIFIER_PATTERNS.iter() {
        let Some(found) = pattern.regex.find(&clean) else {
            continue;
        };
        trace!(label = pattern.label, matched = found.as_str(), "modifier");
        modifiers.push(found.as_str().to_string());
        clean = pattern.regex.replace_all(&clean, " ").into_owned();
    }

    ModifierExtraction { modifiers, clean_name: collapse_whitespace(&clean) }
}
