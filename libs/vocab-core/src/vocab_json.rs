//! Reader for model-generated vocabulary lists.
//!
//! # Format
//! ```text
//! [
//!   {"english": "apple", "vietnamese": "quả táo", "pronunciation": "/ˈæp.əl/",
//!    "example": "I eat an apple.", "memoryTip": "..."}
//! ]
//! ```
//!
//! Responses may arrive wrapped in a markdown code fence or cut off mid-array
//! when the model runs out of tokens. Both are repaired before parsing; the
//! complete objects before the cut are kept.

use crate::error::VocabJsonError;
use crate::types::Word;
use serde_json::Value;

/// Parse a model response into words.
pub fn parse_words(content: &str) -> Result<Vec<Word>, VocabJsonError> {
    let repaired = repair_truncated(strip_code_fence(content));

    let value: Value = serde_json::from_str(&repaired)?;
    let Value::Array(items) = value else {
        return Err(VocabJsonError::NotAnArray);
    };

    let words: Vec<Word> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Word>(item) {
            Ok(word) => Some(word),
            Err(e) => {
                tracing::warn!("skipping incomplete word entry: {}", e);
                None
            }
        })
        .collect();

    if words.is_empty() {
        return Err(VocabJsonError::NoWords);
    }
    Ok(words)
}

/// Remove a surrounding ```json ... ``` fence.
pub fn strip_code_fence(content: &str) -> &str {
    let mut s = content.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// Close an array that was cut off after its last complete object.
pub fn repair_truncated(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.ends_with(']') {
        return trimmed.to_string();
    }

    match (trimmed.find('['), trimmed.rfind('}')) {
        (Some(start), Some(last_brace)) if last_brace > start => {
            format!("{}]", &trimmed[..=last_brace])
        }
        _ => trimmed.to_string(),
    }
}
