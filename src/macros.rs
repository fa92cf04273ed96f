#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`NormalizationRule`](crate::NormalizationRule) for the built-in
/// tables.
///
/// ```ignore
/// rule!(lit: "ΜΠΑΝΑΝΕΣ" => "Bananas", "Fruits")
/// rule!(re: r"(?i)^.*\bmilk\b.*$" => "Milk", "Dairy")
/// ```
#[macro_export]
macro_rules! rule {
    (lit: $pat:literal => $repl:expr $(, $cat:expr)? $(,)?) => {
        $crate::NormalizationRule {
            pattern: $crate::Pattern::Literal(String::from($pat)),
            replacement: String::from($repl),
            category: { None::<String> $(.or(Some(String::from($cat))))? },
        }
    };
    (re: $pat:literal => $repl:expr $(, $cat:expr)? $(,)?) => {
        $crate::NormalizationRule {
            pattern: $crate::Pattern::Regex($crate::regex!($pat).clone()),
            replacement: String::from($repl),
            category: { None::<String> $(.or(Some(String::from($cat))))? },
        }
    };
}

#[macro_export]
macro_rules! modifier {
    ($label:literal, $pat:literal) => {
        $crate::ModifierPattern { label: $label, regex: $crate::regex!($pat) }
    };
}
