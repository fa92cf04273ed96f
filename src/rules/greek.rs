use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Greek → Latin approximations, covering both cases, final sigma, tonos
/// accents and diaeresis forms. Uppercase digraphs stay uppercase (`Θ` → `TH`)
/// since receipts are mostly printed in capitals.
pub(crate) static GREEK_TO_LATIN: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // lowercase
        ('α', "a"),
        ('β', "v"),
        ('γ', "g"),
        ('δ', "d"),
        ('ε', "e"),
        ('ζ', "z"),
        ('η', "i"),
        ('θ', "th"),
        ('ι', "i"),
        ('κ', "k"),
        ('λ', "l"),
        ('μ', "m"),
        ('ν', "n"),
        ('ξ', "x"),
        ('ο', "o"),
        ('π', "p"),
        ('ρ', "r"),
        ('σ', "s"),
        ('ς', "s"),
        ('τ', "t"),
        ('υ', "y"),
        ('φ', "f"),
        ('χ', "ch"),
        ('ψ', "ps"),
        ('ω', "o"),
        // lowercase with tonos / diaeresis
        ('ά', "a"),
        ('έ', "e"),
        ('ή', "i"),
        ('ί', "i"),
        ('ό', "o"),
        ('ύ', "y"),
        ('ώ', "o"),
        ('ϊ', "i"),
        ('ϋ', "y"),
        ('ΐ', "i"),
        ('ΰ', "y"),
        // uppercase
        ('Α', "A"),
        ('Β', "V"),
        ('Γ', "G"),
        ('Δ', "D"),
        ('Ε', "E"),
        ('Ζ', "Z"),
        ('Η', "I"),
        ('Θ', "TH"),
        ('Ι', "I"),
        ('Κ', "K"),
        ('Λ', "L"),
        ('Μ', "M"),
        ('Ν', "N"),
        ('Ξ', "X"),
        ('Ο', "O"),
        ('Π', "P"),
        ('Ρ', "R"),
        ('Σ', "S"),
        ('Τ', "T"),
        ('Υ', "Y"),
        ('Φ', "F"),
        ('Χ', "CH"),
        ('Ψ', "PS"),
        ('Ω', "O"),
        // uppercase with tonos / diaeresis
        ('Ά', "A"),
        ('Έ', "E"),
        ('Ή', "I"),
        ('Ί', "I"),
        ('Ό', "O"),
        ('Ύ', "Y"),
        ('Ώ', "O"),
        ('Ϊ', "I"),
        ('Ϋ', "Y"),
        // punctuation
        ('\u{037E}', ";"),
        ('\u{0387}', "."),
    ])
});
