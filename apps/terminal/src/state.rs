//! Application state.

use crate::ai::AiClient;
use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::db::SqliteRepository;
use crate::error::Result;
use crate::vocabulary::Vocabulary;

/// Everything a command needs.
pub struct AppState {
    pub vocabulary: Vocabulary<SqliteRepository>,
    pub ai: AiClient,
}

impl AppState {
    pub fn new(vocabulary: Vocabulary<SqliteRepository>, ai: AiClient) -> Self {
        Self { vocabulary, ai }
    }

    /// Open the on-disk store described by `config`.
    pub fn open(config: &AppConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let db_path = config.db_path();
        tracing::debug!(path = %db_path.display(), "opening vocabulary store");

        let repository = SqliteRepository::open(&db_path)?;
        let ai = AiClient::new(config.ai.clone())?;
        Ok(Self::new(Vocabulary::new(repository, Catalog::shipped()), ai))
    }

    /// In-memory store, nothing touches disk.
    pub fn in_memory(config: &AppConfig) -> Result<Self> {
        let repository = SqliteRepository::open_in_memory()?;
        let ai = AiClient::new(config.ai.clone())?;
        Ok(Self::new(Vocabulary::new(repository, Catalog::shipped()), ai))
    }
}
