//! Normalization engine.
//!
//! Every receipt line goes through the same strictly sequential pipeline. Each
//! stage is a pure function over strings; nothing is carried between calls.
//!
//! ```text
//! raw name
//!    │  preprocess            (preprocess.rs)
//!    │    - abbreviations, quantities, prices, parentheses
//!    v
//! extract_modifiers           (modifiers.rs)
//!    │    - organic / fresh / gluten-free ... pulled out
//!    v
//! store rules ──(name unchanged?)──▶ default rules   (matcher.rs, rule_set.rs)
//!    │    - first match wins, `$1` substitution (substitute.rs)
//!    v
//! transliterate_greek         (transliterate.rs)
//!    │    - only when Greek text is left over
//!    v
//! build_description + confidence   (score.rs)
//!    │
//!    v
//! NormalizationResult         (pipeline.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `rule_set.rs`: the immutable `RuleSet` (defaults + per-store lists).
//! - `matcher.rs`: first-match-wins dispatch and the store → default fallback.
//! - `pipeline.rs`: wires the stages together and records per-stage metrics.
//! - `metrics.rs`: timings and the `Stages` trace for verbose runs.
//!
//! ## Adding rules
//!
//! Built-in tables live under `src/rules/**`. Order inside a list is part of
//! the contract: put specific patterns before general ones.

#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/modifiers.rs"]
mod modifiers;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/preprocess.rs"]
mod preprocess;
#[path = "engine/rule_set.rs"]
mod rule_set;
#[path = "engine/score.rs"]
mod score;
#[path = "engine/substitute.rs"]
mod substitute;
#[path = "engine/transliterate.rs"]
mod transliterate;

pub use matcher::{RuleOutcome, RuleSource, apply_rules};
pub use metrics::{StageMetrics, Stages};
pub use modifiers::{ModifierExtraction, extract_modifiers};
pub(crate) use pipeline::Pipeline;
pub use preprocess::preprocess;
pub(crate) use rule_set::store_key;
pub use rule_set::RuleSet;
pub use score::{build_description, confidence};
pub(crate) use substitute::substitute_first;
pub use transliterate::{contains_greek, transliterate_greek};
