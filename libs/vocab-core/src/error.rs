//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised before a round or session can start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("not enough words to play: need at least {required}, have {available}")]
    InsufficientWords { required: usize, available: usize },

    #[error("pair count must be at least 1")]
    ZeroPairs,
}

/// Errors that can occur while reading model-generated vocabulary.
#[derive(Debug, Error)]
pub enum VocabJsonError {
    #[error("invalid or truncated JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON array of words")]
    NotAnArray,

    #[error("no usable words in response")]
    NoWords,
}
