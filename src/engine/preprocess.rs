//! Receipt-line noise removal.
//!
//! Runs before anything else looks at the name. Order:
//!
//! 1. trim
//! 2. abbreviation expansion (`ORG`, `BIO` → `ORGANIC`, ...)
//! 3. quantity multipliers (`2 x 500g`, `3X1 pcs`)
//! 4. piece counts (`6 pcs`, `4 τεμ.`)
//! 5. `pack of N`
//! 6. prices (`12.34 €`, `€3,50`, `1.99 EUR`)
//! 7. parenthetical asides
//! 8. whitespace collapse
//!
//! Removed spans are replaced by a space so neighbouring words never fuse.

use crate::rules::abbreviations::ABBREVIATIONS;
use regex::NoExpand;
use tracing::trace;

/// Strip receipt noise from `raw`.
///
/// The output has no leading/trailing whitespace and no runs of whitespace.
/// An empty result is valid.
pub fn preprocess(raw: &str) -> String {
    let mut name = raw.trim().to_string();
    if name.is_empty() {
        return name;
    }

    for (re, expansion) in ABBREVIATIONS.iter() {
        name = re.replace_all(&name, NoExpand(*expansion)).into_owned();
    }

    let noise = [
        regex!(r"(?i)\d+\s*[x×*]\s*\d+(?:[.,]\d+)?\s*(?:pcs?\b|pieces?\b|τεμ\b|g\b|gr\b|kg\b|ml\b|lt?\b)?\.?"),
        regex!(r"(?i)\b\d+\s*(?:pcs?|pieces?|τεμ(?:άχια|αχια)?)\b\.?"),
        regex!(r"(?i)\bpack\s+of\s+\d+\b"),
        regex!(r"(?i)(?:€|\beur\b)\s*\d+(?:[.,]\d{1,2})?"),
        regex!(r"(?i)\d+(?:[.,]\d{1,2})?\s*(?:€|\beur\b)"),
        regex!(r"\([^)]*\)"),
    ];
    for re in noise {
        name = re.replace_all(&name, " ").into_owned();
    }

    let collapsed = collapse_whitespace(&name);
    trace!(raw, preprocessed = %collapsed, "preprocess");
    collapsed
}

/// Collapse whitespace runs to a single space and trim.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
