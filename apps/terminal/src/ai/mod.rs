//! Client for an OpenAI-compatible chat-completions endpoint.
//!
//! Used for two things: generating a vocabulary list on a topic, and a
//! free-form tutoring chat.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use vocab_core::{parse_words, VocabJsonError, Word};

use crate::config::AiConfig;

mod prompt;

pub use prompt::{build_vocabulary_prompt, Style, CHAT_SYSTEM_PROMPT};

/// Largest word list a single generation may ask for.
pub const MAX_GENERATED_WORDS: usize = 50;

/// AI client errors.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key is not configured - set OPENAI_API_KEY")]
    MissingApiKey,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("No content in API response")]
    EmptyResponse,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabJsonError),
}

/// What to generate.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub topic: String,
    pub word_count: usize,
    pub interests: String,
    pub style: Style,
}

impl GenerateRequest {
    pub fn new(topic: impl Into<String>, word_count: usize) -> Self {
        Self {
            topic: topic.into(),
            word_count,
            interests: String::new(),
            style: Style::Default,
        }
    }

    fn validate(&self) -> Result<(), AiError> {
        if self.topic.trim().is_empty() {
            return Err(AiError::InvalidRequest("topic must not be empty".into()));
        }
        if !(1..=MAX_GENERATED_WORDS).contains(&self.word_count) {
            return Err(AiError::InvalidRequest(format!(
                "word count must be between 1 and {MAX_GENERATED_WORDS}"
            )));
        }
        Ok(())
    }

    /// Token budget: roughly 250 tokens per word, never below 4000.
    pub fn max_tokens(&self) -> u32 {
        (self.word_count as u32 * 250).max(4000)
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first choice's text from a completion response body.
pub fn completion_content(body: &str) -> Result<String, AiError> {
    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|e| AiError::Parse(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(AiError::EmptyResponse)
}

/// Chat-completions client.
#[derive(Clone)]
pub struct AiClient {
    client: Client,
    config: AiConfig,
}

impl AiClient {
    pub fn new(config: AiConfig) -> Result<Self, AiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| AiError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Ask the model for a vocabulary list.
    pub async fn generate_vocabulary(&self, request: &GenerateRequest) -> Result<Vec<Word>, AiError> {
        request.validate()?;
        let prompt = build_vocabulary_prompt(request);
        let messages = vec![ApiMessage {
            role: "user",
            content: &prompt,
        }];

        let content = self.complete(messages, request.max_tokens()).await?;
        if content.len() > 500 {
            tracing::debug!(len = content.len(), "vocabulary response received");
        } else {
            tracing::debug!(%content, "vocabulary response received");
        }

        let words = parse_words(&content)?;
        tracing::info!(count = words.len(), topic = %request.topic, "generated vocabulary");
        Ok(words)
    }

    /// Send one chat message and return the reply.
    pub async fn chat(&self, message: &str) -> Result<String, AiError> {
        if message.trim().is_empty() {
            return Err(AiError::InvalidRequest("message must not be empty".into()));
        }
        let messages = vec![
            ApiMessage {
                role: "system",
                content: CHAT_SYSTEM_PROMPT,
            },
            ApiMessage {
                role: "user",
                content: message,
            },
        ];
        self.complete(messages, 2000).await
    }

    async fn complete(&self, messages: Vec<ApiMessage<'_>>, max_tokens: u32) -> Result<String, AiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AiError::MissingApiKey)?;

        let request = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: 0.7,
            max_tokens,
        };

        let resp = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "completion request failed");
            return Err(AiError::Api { status, message });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;
        completion_content(&body)
    }
}
