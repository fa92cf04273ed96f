use once_cell::sync::Lazy;
use regex::Regex;

/// Whole-word, case-insensitive abbreviations and their expansions.
///
/// `ΒΙΟ` is the Greek-script spelling that shows up on Greek and Cypriot
/// receipts next to the Latin `BIO`.
pub(crate) static ABBREVIATIONS: Lazy<Vec<(&'static Regex, &'static str)>> = Lazy::new(|| {
    vec![(regex!(r"(?i)\b(?:ORG|BIO|ΒΙΟ)\b"), "ORGANIC"), (regex!(r"(?i)\bGF\b"), "GLUTEN-FREE")]
});
