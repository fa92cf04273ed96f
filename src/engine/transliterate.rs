//! Greek → Latin transliteration.
//!
//! Character by character through a fixed table (`rules/greek.rs`). Anything
//! the table does not know (Latin letters, digits, punctuation, rare Greek
//! code points) passes through untouched. Some letters map to two Latin
//! characters (`θ` → `th`), so the output can be longer than the input.

use crate::rules::greek::GREEK_TO_LATIN;

/// True iff some character lies in the Greek and Coptic block (U+0370–U+03FF).
pub fn contains_greek(s: &str) -> bool {
    s.chars().any(|c| ('\u{0370}'..='\u{03FF}').contains(&c))
}

/// Map every Greek character of `s` to its Latin approximation.
pub fn transliterate_greek(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match GREEK_TO_LATIN.get(&c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
