//! Store-specific overrides.
//!
//! These cover each retailer's receipt conventions (own brands, truncated
//! product names) and are tried before the default rules. A store rule that
//! matches ends matching for that item, so keep them narrow.

use crate::NormalizationRule;

pub(crate) fn get() -> Vec<(&'static str, Vec<NormalizationRule>)> {
    vec![("ALPHAMEGA", alphamega()), ("LIDL", lidl()), ("SKLAVENITIS", sklavenitis()), ("AB", ab())]
}

fn alphamega() -> Vec<NormalizationRule> {
    vec![
        rule!(lit: "ΜΠΑΝΑΝΕΣ" => "Bananas", "Fruits"),
        rule!(lit: "ΦΡΕΣΚΟ ΨΩΜΙ" => "Fresh Bread", "Bakery"),
        rule!(re: r"(?i)^ΓΑΛΑ\s+ΦΡ(?:ΕΣΚΟ|\.)?\s*(\d+(?:[.,]\d+)?)\s*%.*$" => "Fresh Milk $1%", "Dairy"),
        rule!(re: r"(?i)^.*\bΦΡ(?:ΕΣΚΟ|\.)\s*ΓΑΛΑ\b.*$" => "Fresh Milk", "Dairy"),
        rule!(re: r"(?i)^.*\bΧΑΛΛΟΥΜΙ\s+ΚΥΠΡ.*$" => "Cyprus Halloumi", "Dairy"),
    ]
}

fn lidl() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^.*\bMILBONA\b.*\b(?:YOG(?:H?URT)?|ΓΙΑΟΥΡΤΙ)\b.*$" => "Yogurt", "Dairy"),
        rule!(re: r"(?i)^.*\bPILOS\b.*\bFETA\b.*$" => "Feta Cheese", "Dairy"),
        rule!(re: r"(?i)^H-?MILCH\b.*?(\d+(?:[.,]\d+)?)\s*%.*$" => "Long Life Milk $1%", "Dairy"),
        rule!(re: r"(?i)^BANANEN?\b.*$" => "Bananas", "Fruits"),
        rule!(re: r"(?i)^.*\bSOLEVITA\b.*$" => "Juice", "Beverages"),
    ]
}

fn sklavenitis() -> Vec<NormalizationRule> {
    vec![
        rule!(lit: "ΨΩΜΙ ΤΟΣΤ" => "Toast Bread", "Bakery"),
        rule!(re: r"(?i)^.*\bΚΙΜΑΣ\s+ΜΟΣΧ.*$" => "Minced Beef", "Meat"),
    ]
}

fn ab() -> Vec<NormalizationRule> {
    vec![
        rule!(re: r"(?i)^(?:ΑΒ|AB)\s+ΕΛΑΙΟΛΑΔΟ\b.*$" => "Olive Oil", "Pantry"),
        rule!(re: r"(?i)^(?:ΑΒ|AB)\s+ΓΑΛΑ\b.*$" => "Milk", "Dairy"),
    ]
}
