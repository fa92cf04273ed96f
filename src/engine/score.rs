//! Confidence scoring and description building.

/// Heuristic confidence in `[0, 0.99]`.
///
/// ```text
/// 0.5                       base
/// + 0.3                     a category was assigned
/// + 0.2 * overlap           overlap = common words / max(original words, 1)
/// min(.., 0.99)
/// ```
///
/// An original word is "common" if some normalized word contains it or is
/// contained by it (both sides lowercased, split on whitespace).
pub fn confidence(original: &str, normalized: &str, matched_category: bool) -> f64 {
    let mut score = 0.5;
    if matched_category {
        score += 0.3;
    }

    let original_lower = original.to_lowercase();
    let normalized_lower = normalized.to_lowercase();
    let original_words: Vec<&str> = original_lower.split_whitespace().collect();
    let normalized_words: Vec<&str> = normalized_lower.split_whitespace().collect();

    let common = original_words
        .iter()
        .filter(|word| normalized_words.iter().any(|n| n.contains(**word) || word.contains(*n)))
        .count();
    let overlap = common as f64 / original_words.len().max(1) as f64;
    score += overlap * 0.2;

    score.min(0.99)
}

/// Human-readable description: `"<modifiers> <name>"`, plus `" (<original>)"`
/// when normalization rewrote the name beyond recognition.
pub fn build_description(normalized: &str, original: &str, modifiers: &[String]) -> String {
    let mut description = if modifiers.is_empty() {
        normalized.to_string()
    } else {
        format!("{} {}", modifiers.join(", "), normalized)
    };

    let normalized_lower = normalized.to_lowercase();
    let original_lower = original.to_lowercase();
    if normalized_lower != original_lower && !original_lower.contains(&normalized_lower) {
        description.push_str(&format!(" ({original})"));
    }

    description
}
