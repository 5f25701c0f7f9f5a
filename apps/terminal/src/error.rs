//! Error handling for the terminal application.

use thiserror::Error;

use crate::ai::AiError;
use crate::db::DbError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Core(#[from] vocab_core::CoreError),

    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    #[error("Set is read-only: {0}")]
    ReadOnlySet(String),

    #[error("Set id is reserved by shipped content: {0}")]
    ReservedSetId(String),

    #[error("Unknown set: {0}")]
    UnknownSet(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
