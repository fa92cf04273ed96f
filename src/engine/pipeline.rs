//! Stage orchestration.
//!
//! `Pipeline` holds a shared reference to a `RuleSet` and runs one input
//! through every stage in order:
//!
//! ```text
//! empty? ──yes──▶ zero result
//!   │no
//!   v
//! preprocess ─▶ extract_modifiers ─▶ match_with_fallback ─▶ transliterate?
//!                                                                │
//!                         NormalizationResult ◀─ confidence ◀─ description
//! ```
//!
//! There is no branching back and no error path: any string input yields a
//! result, at worst a pass-through with low confidence.

use super::matcher::{RuleSource, match_with_fallback};
use super::metrics::{StageMetrics, Stages};
use super::{RuleSet, build_description, confidence, contains_greek, extract_modifiers, preprocess, transliterate_greek};
use crate::{Context, NormalizationDetails, NormalizationResult, Options};
use std::time::Instant;
use tracing::debug;

/// Output of [`Pipeline::run_with_metrics`].
#[derive(Debug, Clone)]
pub(crate) struct PipelineRun {
    pub result: NormalizationResult,
    pub details: NormalizationDetails,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Pipeline<'a> {
    rules: &'a RuleSet,
}

impl<'a> Pipeline<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Pipeline { rules }
    }

    pub fn run(&self, input: &str, context: &Context, options: &Options) -> NormalizationResult {
        self.run_with_metrics(input, context, options).result
    }

    pub fn run_with_metrics(&self, input: &str, context: &Context, options: &Options) -> PipelineRun {
        let started = Instant::now();
        let mut metrics = StageMetrics::default();
        let mut stages = Stages::empty();

        if input.is_empty() {
            metrics.total = started.elapsed();
            return PipelineRun {
                result: NormalizationResult::empty(input),
                details: NormalizationDetails::empty(metrics),
            };
        }

        let t = Instant::now();
        let preprocessed = preprocess(input);
        metrics.preprocess = t.elapsed();
        if preprocessed != input.trim() {
            stages |= Stages::PREPROCESSED;
        }

        let t = Instant::now();
        let extraction = extract_modifiers(&preprocessed);
        metrics.modifiers = t.elapsed();
        if !extraction.modifiers.is_empty() {
            stages |= Stages::MODIFIERS;
        }

        let t = Instant::now();
        let store = context.store_name.as_deref();
        let outcome = match_with_fallback(self.rules, &extraction.clean_name, store, options.fallback);
        metrics.matching = t.elapsed();
        match outcome.source {
            RuleSource::Store(_) => stages |= Stages::STORE_RULE,
            RuleSource::Default => stages |= Stages::DEFAULT_RULE,
            RuleSource::Unmatched => {}
        }

        let t = Instant::now();
        let mut normalized_name = outcome.normalized_name;
        if options.transliterate && contains_greek(&normalized_name) {
            normalized_name = transliterate_greek(&normalized_name);
            stages |= Stages::TRANSLITERATED;
        }
        metrics.transliteration = t.elapsed();

        let t = Instant::now();
        let description = build_description(&normalized_name, input, &extraction.modifiers);
        let score = confidence(input, &normalized_name, outcome.category.is_some());
        metrics.scoring = t.elapsed();

        debug!(
            input,
            normalized = %normalized_name,
            category = ?outcome.category,
            source = ?outcome.source,
            confidence = score,
            "normalized item"
        );

        metrics.total = started.elapsed();

        let result = NormalizationResult {
            normalized_name,
            original_name: input.to_string(),
            category: outcome.category,
            description: Some(description),
            modifiers: extraction.modifiers,
            confidence: score,
        };
        let details = NormalizationDetails {
            preprocessed,
            clean_name: extraction.clean_name,
            source: outcome.source,
            rule_index: outcome.rule_index,
            stages,
            metrics,
        };

        PipelineRun { result, details }
    }
}
