//! Runtime configuration read from the environment.

use std::path::PathBuf;

const APP_DIR: &str = "vocab-trainer";
const DB_FILE: &str = "vocabulary.db";
const DEFAULT_AI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";

/// Settings for the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_AI_URL.to_string(),
            model: DEFAULT_AI_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load from the process environment, after reading a `.env` file if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = var("VOCAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let defaults = AiConfig::default();
        let ai = AiConfig {
            api_key: var("OPENAI_API_KEY"),
            api_url: var("VOCAB_AI_URL").unwrap_or(defaults.api_url),
            model: var("VOCAB_AI_MODEL").unwrap_or(defaults.model),
        };

        Self { data_dir, ai }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    // Fall back to the working directory when the platform has no data dir
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert!(config.data_dir.ends_with(APP_DIR));
        assert!(config.db_path().ends_with("vocab-trainer/vocabulary.db"));
        assert_eq!(config.ai, AiConfig::default());
        assert_eq!(config.ai.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("VOCAB_DATA_DIR", "/tmp/vocab"),
            ("OPENAI_API_KEY", "sk-test"),
            ("VOCAB_AI_URL", "http://localhost:8080/v1/chat/completions"),
            ("VOCAB_AI_MODEL", "gpt-4o-mini"),
        ]));
        assert_eq!(config.db_path(), PathBuf::from("/tmp/vocab/vocabulary.db"));
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.api_url, "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.ai.model, "gpt-4o-mini");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = AppConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "  "), ("VOCAB_AI_MODEL", "")]));
        assert_eq!(config.ai.api_key, None);
        assert_eq!(config.ai.model, DEFAULT_AI_MODEL);
    }
}
