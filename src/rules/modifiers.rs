use crate::ModifierPattern;
use once_cell::sync::Lazy;

/// Qualifier patterns, applied in this order.
///
/// Greek "fresh" (`ΦΡΕΣΚΟ`) is deliberately absent: on Greek receipts it is
/// part of the product name ("ΦΡΕΣΚΟ ΓΑΛΑ" is a different product from
/// long-life milk) and store rules map it as a whole.
pub(crate) static MODIFIER_PATTERNS: Lazy<Vec<ModifierPattern>> = Lazy::new(|| {
    vec![
        modifier!("organic", r"(?i)\b(?:organic|βιολογικ[όοήηάαέε][σς]?)\b"),
        modifier!("fresh", r"(?i)\bfresh\b"),
        modifier!("frozen", r"(?i)\b(?:frozen|κατεψυγμ[εέ]ν[οηαε][σς]?)\b"),
        modifier!("gluten-free", r"(?i)\b(?:gluten[\s-]?free|χωρ[ιί][σς]\s+γλουτ[εέ]νη)\b"),
        modifier!("lactose-free", r"(?i)\b(?:lactose[\s-]?free|χωρ[ιί][σς]\s+λακτ[οό]ζη)\b"),
        modifier!("sugar-free", r"(?i)\b(?:sugar[\s-]?free|no\s+added\s+sugar)\b"),
        modifier!("low-fat", r"(?i)\blow[\s-]?fat\b"),
        modifier!("light", r"(?i)\b(?:light|lite)\b"),
        modifier!("whole-grain", r"(?i)\bwhole[\s-]?(?:grain|wheat)\b"),
        modifier!("extra-virgin", r"(?i)\bextra[\s-]virgin\b"),
        modifier!("premium", r"(?i)\bpremium\b"),
    ]
});
