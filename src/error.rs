use thiserror::Error;

/// Errors raised while building or loading rule sets.
///
/// Normalization itself never fails; these only surface at the configuration
/// boundary (custom rule documents, hand-built rules).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("rule pattern must not be empty")]
    EmptyPattern,
    #[error("store name must not be empty")]
    EmptyStore,
    #[error("invalid rule document: {0}")]
    InvalidRuleFile(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
