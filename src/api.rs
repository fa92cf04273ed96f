use crate::engine::{Pipeline, RuleSet, RuleSource, StageMetrics, Stages};
use serde::Serialize;
use tracing::debug;

/// Per-item context: what is known about where the line came from.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Store detected on the receipt, if any (e.g. `"ALPHAMEGA"`).
    pub store_name: Option<String>,
}

impl Context {
    pub fn for_store(store: impl Into<String>) -> Self {
        Context { store_name: Some(store.into()) }
    }
}

/// When the pipeline falls back from store rules to default rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fall back whenever the store pass left the name unchanged, even if a
    /// store rule matched and rewrote it to itself.
    #[default]
    NameChanged,
    /// Fall back only when no store rule matched.
    ExplicitMatch,
}

/// Options that affect normalization behavior.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub fallback: FallbackPolicy,
    /// Transliterate leftover Greek text to Latin.
    pub transliterate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { fallback: FallbackPolicy::default(), transliterate: true }
    }
}

/// Normalized form of one receipt line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    /// Canonical name; empty when nothing survives preprocessing.
    pub normalized_name: String,
    /// The input, verbatim.
    pub original_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Extracted qualifiers, in extraction order.
    pub modifiers: Vec<String>,
    /// Heuristic estimate in `[0, 0.99]`.
    pub confidence: f64,
}

impl NormalizationResult {
    /// The zero-value result returned for empty input.
    pub fn empty(original: &str) -> Self {
        NormalizationResult {
            normalized_name: String::new(),
            original_name: original.to_string(),
            category: None,
            description: None,
            modifiers: Vec::new(),
            confidence: 0.0,
        }
    }
}

/// Intermediate values and timings from a verbose run.
#[derive(Debug, Clone)]
pub struct NormalizationDetails {
    /// Output of the preprocessor.
    pub preprocessed: String,
    /// Name after modifier extraction, as fed to the rule matcher.
    pub clean_name: String,
    pub source: RuleSource,
    /// Index of the winning rule within its list.
    pub rule_index: Option<usize>,
    pub stages: Stages,
    pub metrics: StageMetrics,
}

impl NormalizationDetails {
    pub(crate) fn empty(metrics: StageMetrics) -> Self {
        NormalizationDetails {
            preprocessed: String::new(),
            clean_name: String::new(),
            source: RuleSource::Unmatched,
            rule_index: None,
            stages: Stages::empty(),
            metrics,
        }
    }
}

/// Result from [`normalize_verbose_with`] and [`Normalizer::normalize_verbose_with`].
#[derive(Debug, Clone)]
pub struct NormalizationVerbose {
    pub result: NormalizationResult,
    pub details: NormalizationDetails,
}

/// Normalize one receipt item name with the built-in rules.
///
/// # Example
/// ```
/// use larder::normalize_item_name;
///
/// let res = normalize_item_name("organic ΜΗΛΑ", None);
/// assert_eq!(res.normalized_name, "Apples");
/// assert_eq!(res.modifiers, vec!["organic"]);
/// ```
pub fn normalize_item_name(original_name: &str, store_name: Option<&str>) -> NormalizationResult {
    let context = Context { store_name: store_name.map(str::to_string) };
    normalize_with(original_name, &context, &Options::default())
}

/// Normalize `text` with the built-in rules, no store context and default options.
pub fn normalize(text: &str) -> NormalizationResult {
    normalize_with(text, &Context::default(), &Options::default())
}

/// Normalize `text` with the built-in rules and the given `context`/`options`.
pub fn normalize_with(text: &str, context: &Context, options: &Options) -> NormalizationResult {
    Pipeline::new(RuleSet::builtin()).run(text, context, options)
}

/// Like [`normalize_with`] but also returns the intermediate stages and timings.
pub fn normalize_verbose_with(text: &str, context: &Context, options: &Options) -> NormalizationVerbose {
    let run = Pipeline::new(RuleSet::builtin()).run_with_metrics(text, context, options);
    NormalizationVerbose { result: run.result, details: run.details }
}

/// A normalizer bound to a specific rule set.
///
/// Use this when custom rules are loaded at startup; the built-in rules are
/// reachable through the free functions.
#[derive(Debug, Clone)]
pub struct Normalizer {
    rules: RuleSet,
    options: Options,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(RuleSet::builtin().clone())
    }
}

impl Normalizer {
    pub fn new(rules: RuleSet) -> Self {
        Normalizer { rules, options: Options::default() }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn normalize(&self, original_name: &str, store_name: Option<&str>) -> NormalizationResult {
        let context = Context { store_name: store_name.map(str::to_string) };
        self.normalize_with(original_name, &context)
    }

    pub fn normalize_with(&self, text: &str, context: &Context) -> NormalizationResult {
        Pipeline::new(&self.rules).run(text, context, &self.options)
    }

    pub fn normalize_verbose_with(&self, text: &str, context: &Context) -> NormalizationVerbose {
        let run = Pipeline::new(&self.rules).run_with_metrics(text, context, &self.options);
        NormalizationVerbose { result: run.result, details: run.details }
    }

    /// Normalize every line item of one receipt against the same store.
    pub fn normalize_batch<S: AsRef<str>>(&self, items: &[S], store_name: Option<&str>) -> Vec<NormalizationResult> {
        let context = Context { store_name: store_name.map(str::to_string) };
        let pipeline = Pipeline::new(&self.rules);
        let results: Vec<NormalizationResult> =
            items.iter().map(|item| pipeline.run(item.as_ref(), &context, &self.options)).collect();
        debug!(items = results.len(), categorized = results.iter().filter(|r| r.category.is_some()).count(), "batch");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NormalizationRule, Pattern};
    use proptest::prelude::*;

    #[test]
    fn empty_input_gives_zero_result() {
        let res = normalize_item_name("", None);
        assert_eq!(res.normalized_name, "");
        assert_eq!(res.original_name, "");
        assert!(res.modifiers.is_empty());
        assert_eq!(res.confidence, 0.0);
        assert_eq!(res.category, None);
        assert_eq!(res.description, None);
    }

    #[test]
    fn blank_input_runs_the_pipeline() {
        // Only "" short-circuits; blank and noise-only lines score as unmatched.
        for input in ["   ", "(promo)"] {
            let res = normalize_item_name(input, Some("LIDL"));
            assert_eq!(res.normalized_name, "", "input {input:?}");
            assert_eq!(res.original_name, input);
            assert_eq!(res.category, None);
            assert_eq!(res.description.as_deref(), Some(""), "input {input:?}");
            assert_eq!(res.confidence, 0.5, "input {input:?}");
        }
    }

    #[test]
    fn store_rule_wins_over_default() {
        let ctx = Context::for_store("ALPHAMEGA");
        let res = normalize_verbose_with("ΜΠΑΝΑΝΕΣ", &ctx, &Options::default());
        assert_eq!(res.result.normalized_name, "Bananas");
        assert_eq!(res.result.category.as_deref(), Some("Fruits"));
        assert_eq!(res.details.source, RuleSource::Store("ALPHAMEGA".into()));
        assert!(res.details.stages.contains(Stages::STORE_RULE));
        assert!(!res.details.stages.contains(Stages::DEFAULT_RULE));
    }

    #[test]
    fn store_name_lookup_is_case_insensitive() {
        let res = normalize_item_name("ΓΑΛΑ ΦΡ. 1.5%", Some("alphamega"));
        assert_eq!(res.normalized_name, "Fresh Milk 1.5%");
        let res = normalize_item_name("ΓΑΛΑ ΦΡ. 1.5%", None);
        assert_eq!(res.normalized_name, "Milk 1.5%");
    }

    #[test]
    fn modifiers_are_extracted_before_matching() {
        let res = normalize_item_name("organic ΜΗΛΑ", None);
        assert_eq!(res.modifiers, vec!["organic"]);
        assert_eq!(res.normalized_name, "Apples");
        assert_eq!(res.category.as_deref(), Some("Fruits"));
        assert_eq!(res.description.as_deref(), Some("organic Apples (organic ΜΗΛΑ)"));
    }

    #[test]
    fn description_keeps_original_when_rewritten() {
        let res = normalize_item_name("ΦΡΕΣΚΟ ΨΩΜΙ", Some("ALPHAMEGA"));
        assert_eq!(res.normalized_name, "Fresh Bread");
        assert_eq!(res.category.as_deref(), Some("Bakery"));
        assert!(res.description.as_deref().unwrap().contains("(ΦΡΕΣΚΟ ΨΩΜΙ)"));
    }

    #[test]
    fn leftover_greek_is_transliterated() {
        let res = normalize_item_name("μπανάνες", None);
        assert_eq!(res.normalized_name, "Bananas");
        assert!(!crate::contains_greek(&res.normalized_name));

        let verbose = normalize_verbose_with("ΘΥΜΑΡΙ", &Context::default(), &Options::default());
        assert_eq!(verbose.result.normalized_name, "THYMARI");
        assert_eq!(verbose.result.category, None);
        assert!(verbose.details.stages.contains(Stages::TRANSLITERATED));
    }

    #[test]
    fn literal_store_rule_leaves_remaining_text_for_transliteration() {
        let res = normalize_item_name("ΜΠΑΝΑΝΕΣ ΕΙΣΑΓ.", Some("ALPHAMEGA"));
        assert_eq!(res.normalized_name, "Bananas EISAG.");
        assert_eq!(res.category.as_deref(), Some("Fruits"));
    }

    #[test]
    fn transliteration_can_be_disabled() {
        let opts = Options { transliterate: false, ..Options::default() };
        let res = normalize_with("ΘΥΜΑΡΙ", &Context::default(), &opts);
        assert_eq!(res.normalized_name, "ΘΥΜΑΡΙ");
    }

    #[test]
    fn category_match_scores_higher_than_no_match() {
        let matched = normalize("bananas");
        let unmatched = normalize("bandanas");
        assert!(matched.category.is_some());
        assert!(unmatched.category.is_none());
        assert!(matched.confidence > unmatched.confidence);
    }

    #[test]
    fn canonical_outputs_are_fixed_points() {
        for input in ["ΜΗΛΑ", "μπανάνες", "ΓΑΛΑ 3.5%", "ΦΕΤΑ ΠΟΠ", "ΕΛΑΙΟΛΑΔΟ", "ΚΙΜΑΣ", "organic ΓΙΑΟΥΡΤΙ"] {
            let once = normalize(input).normalized_name;
            let twice = normalize(&once).normalized_name;
            assert_eq!(once, twice, "not a fixed point for {input:?}");
        }
    }

    #[test]
    fn preprocessing_noise_is_ignored() {
        let res = normalize_item_name("BIO ΓΑΛΑ 2 x 1 pcs (PROMO) 1,89 €", None);
        assert_eq!(res.normalized_name, "Milk");
        assert_eq!(res.modifiers, vec!["ORGANIC"]);
        assert_eq!(res.category.as_deref(), Some("Dairy"));
    }

    #[test]
    fn normalizer_with_custom_rules_and_explicit_match() {
        let rules = RuleSet::builtin().clone().with_store(
            "CORNER",
            vec![NormalizationRule::new(Pattern::literal("Milk").unwrap(), "Milk", Some("Corner Dairy"))],
        );

        let faithful = Normalizer::new(rules.clone());
        assert_eq!(faithful.normalize("Milk", Some("CORNER")).category.as_deref(), Some("Dairy"));

        let explicit = Normalizer::new(rules)
            .with_options(Options { fallback: FallbackPolicy::ExplicitMatch, ..Options::default() });
        assert_eq!(explicit.normalize("Milk", Some("CORNER")).category.as_deref(), Some("Corner Dairy"));
    }

    #[test]
    fn batch_preserves_order() {
        let normalizer = Normalizer::default();
        let out = normalizer.normalize_batch(&["ΜΠΑΝΑΝΕΣ", "", "ΦΡΕΣΚΟ ΨΩΜΙ"], Some("ALPHAMEGA"));
        let names: Vec<&str> = out.iter().map(|r| r.normalized_name.as_str()).collect();
        assert_eq!(names, vec!["Bananas", "", "Fresh Bread"]);
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let res = normalize_item_name("ΜΠΑΝΑΝΕΣ", Some("ALPHAMEGA"));
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["normalizedName"], "Bananas");
        assert_eq!(json["originalName"], "ΜΠΑΝΑΝΕΣ");
        assert_eq!(json["category"], "Fruits");

        let empty = serde_json::to_value(normalize("")).unwrap();
        assert!(empty.get("category").is_none());
    }

    #[test]
    fn rule_tables_are_shareable_across_threads() {
        fn is<T: Send + Sync>() {}
        is::<RuleSet>();
        is::<Normalizer>();

        let normalizer = Normalizer::default();
        assert!(normalizer.rules().has_store("ALPHAMEGA"));
        let receipts: [&[&str]; 3] = [&["ΜΠΑΝΑΝΕΣ", "ΦΡ. ΓΑΛΑ"], &["ΨΩΜΙ ΤΟΣΤ"], &["ΦΡΕΣΚΟ ΨΩΜΙ", "ΘΥΜΑΡΙ"]];
        let outputs: Vec<Vec<String>> = std::thread::scope(|scope| {
            let handles: Vec<_> = receipts
                .iter()
                .map(|items| {
                    let normalizer = &normalizer;
                    scope.spawn(move || {
                        normalizer
                            .normalize_batch(*items, Some("ALPHAMEGA"))
                            .into_iter()
                            .map(|r| r.normalized_name)
                            .collect::<Vec<String>>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(outputs[0], vec!["Bananas", "Fresh Milk"]);
        assert_eq!(outputs[1], vec!["Toast Bread"]);
        assert_eq!(outputs[2], vec!["Fresh Bread", "THYMARI"]);
    }

    proptest! {
        #[test]
        fn confidence_is_bounded(s in "\\PC{0,40}", store in prop::option::of("(ALPHAMEGA|LIDL|AB|NOWHERE)")) {
            let res = normalize_item_name(&s, store.as_deref());
            prop_assert!(res.confidence >= 0.0 && res.confidence <= 0.99);
            prop_assert_eq!(res.original_name, s);
        }

        #[test]
        fn greek_never_survives_by_default(s in "[α-ωΑ-ΡΣ-Ωά-ώ ]{1,20}") {
            let res = normalize(&s);
            prop_assert!(!crate::contains_greek(&res.normalized_name));
        }
    }
}
