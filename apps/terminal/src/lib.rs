//! Terminal front end for the vocabulary trainer.
//!
//! Wires the shipped catalog and the SQLite word store into a
//! [`vocabulary::Vocabulary`] service, drives timed matching rounds through
//! [`session::MatchSession`] and talks to a chat-completions endpoint for
//! generated sets.

pub mod ai;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod session;
pub mod state;
pub mod vocabulary;

pub use config::{AiConfig, AppConfig};
pub use error::{AppError, Result};
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output; `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
