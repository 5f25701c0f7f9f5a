//! Database error types.

use thiserror::Error;
use vocab_core::WordId;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("word not found: {0}")]
    WordNotFound(WordId),

    #[error("vocabulary set not found: {0}")]
    SetNotFound(String),

    #[error("vocabulary set already exists: {0}")]
    DuplicateSet(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
