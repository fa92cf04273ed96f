//! Pipeline run metrics.
//!
//! Collected by `Pipeline::run_with_metrics` and surfaced through
//! `normalize_verbose_with` for profiling and rule debugging. The plain
//! `normalize*` entry points drop them.

use std::time::Duration;

bitflags::bitflags! {
    /// Which pipeline stages actually changed something for an input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Stages: u8 {
        /// Preprocessing altered the (trimmed) input.
        const PREPROCESSED   = 1 << 0;
        /// At least one modifier was extracted.
        const MODIFIERS      = 1 << 1;
        /// A store-specific rule produced the name.
        const STORE_RULE     = 1 << 2;
        /// A default rule produced the name.
        const DEFAULT_RULE   = 1 << 3;
        /// Leftover Greek text was transliterated.
        const TRANSLITERATED = 1 << 4;
    }
}

/// Per-stage timings for a single normalization.
#[derive(Debug, Default, Clone, Copy)]
pub struct StageMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    pub preprocess: Duration,
    pub modifiers: Duration,
    /// Store + default rule matching.
    pub matching: Duration,
    pub transliteration: Duration,
    /// Description building and confidence scoring.
    pub scoring: Duration,
}
