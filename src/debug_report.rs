use larder::{NormalizationVerbose, RuleSource, Stages};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, run: &NormalizationVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let result = &run.result;
    let details = &run.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Normalizing: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Stages ━━━", ansi::GRAY));
    print_stage(&palette, "preprocess", &details.preprocessed, details.stages.contains(Stages::PREPROCESSED));
    let modifiers = if result.modifiers.is_empty() { "-".to_string() } else { result.modifiers.join(", ") };
    print_stage(&palette, "modifiers", &modifiers, details.stages.contains(Stages::MODIFIERS));
    print_stage(&palette, "clean name", &details.clean_name, details.stages.contains(Stages::MODIFIERS));
    let matched = details.stages.intersects(Stages::STORE_RULE | Stages::DEFAULT_RULE);
    print_stage(&palette, "rule", &fmt_source(&details.source, details.rule_index), matched);
    print_stage(
        &palette,
        "transliterate",
        if details.stages.contains(Stages::TRANSLITERATED) { "yes" } else { "no" },
        details.stages.contains(Stages::TRANSLITERATED),
    );

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    if result.normalized_name.is_empty() {
        println!("{}", palette.dim("  Nothing left to normalize"));
    } else {
        println!(
            "  {} {} {}",
            palette.bold(palette.paint(&result.normalized_name, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(result.category.as_deref().unwrap_or("uncategorized"), ansi::BLUE),
        );
        if let Some(description) = &result.description {
            println!("  {} {}", palette.dim("description:"), description);
        }
        let score = palette.paint(format!("{:.2}", result.confidence), confidence_color(result.confidence));
        println!("  {} {}", palette.dim("confidence:"), score);
    }

    let metrics = &details.metrics;
    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Preprocess: {}  │  Rules: {}  │  Scoring: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.dim(format!("{:?}", metrics.preprocess)),
        palette.paint(format!("{:?}", metrics.matching), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.scoring)),
    );
    println!();
}

fn print_stage(palette: &ansi::Palette, label: &str, value: &str, changed: bool) {
    let marker = if changed { palette.paint("✓", ansi::GREEN) } else { palette.dim("·") };
    println!("  {} {} {}", marker, palette.paint(format!("{label:<14}"), ansi::BLUE), value);
}

fn fmt_source(source: &RuleSource, index: Option<usize>) -> String {
    let index = index.map(|i| format!(" #{i}")).unwrap_or_default();
    match source {
        RuleSource::Store(store) => format!("store {store}{index}"),
        RuleSource::Default => format!("default{index}"),
        RuleSource::Unmatched => "no match".to_string(),
    }
}

fn confidence_color(confidence: f64) -> &'static str {
    if confidence >= 0.8 {
        ansi::GREEN
    } else if confidence >= 0.6 {
        ansi::YELLOW
    } else {
        ansi::GRAY
    }
}
