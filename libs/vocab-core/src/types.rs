//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A vocabulary word (English headword with its Vietnamese meaning).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub english: String,
    pub vietnamese: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub example: String,
    #[serde(default, rename = "memoryTip")]
    pub memory_tip: String,
}

impl Word {
    /// Create a word with only the two faces set.
    pub fn new(english: impl Into<String>, vietnamese: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            vietnamese: vietnamese.into(),
            pronunciation: String::new(),
            example: String::new(),
            memory_tip: String::new(),
        }
    }

    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = pronunciation.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    pub fn with_memory_tip(mut self, memory_tip: impl Into<String>) -> Self {
        self.memory_tip = memory_tip.into();
        self
    }
}

/// Stable identifier of a user-stored word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub Uuid);

impl WordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from the hyphenated string form.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }
}

impl Default for WordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A word stored by the user, addressed by its synthetic id.
///
/// Two entries with identical text are still distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: WordId,
    #[serde(flatten)]
    pub word: Word,
}

impl WordEntry {
    pub fn new(word: Word) -> Self {
        Self {
            id: WordId::new(),
            word,
        }
    }
}

/// Where a vocabulary set comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetOrigin {
    /// Bundled with the application, read-only metadata.
    Shipped,
    /// Created at runtime, editable and deletable.
    User,
}

/// How a user set came into existence. Determines its id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    Manual,
    Generated,
}

impl SetKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Manual => "user_",
            Self::Generated => "ai_",
        }
    }
}

/// Generate a fresh user set id. Shipped ids never carry these prefixes.
pub fn new_user_set_id(kind: SetKind) -> String {
    format!("{}{}", kind.prefix(), Uuid::new_v4().simple())
}

/// Whether a set id lives in the user namespace.
pub fn is_user_namespace(set_id: &str) -> bool {
    set_id.starts_with(SetKind::Manual.prefix()) || set_id.starts_with(SetKind::Generated.prefix())
}

/// Vocabulary set with its word count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySet {
    pub title: String,
    pub set_id: String,
    pub word_count: usize,
}

/// Visual state of a match card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    Idle,
    Selected,
    CorrectPending,
    WrongPending,
    Resolved,
}

impl Default for CardState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CardState {
    /// Only idle cards accept a tap.
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Pending states are held for a fixed delay before settling.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::CorrectPending | Self::WrongPending)
    }
}

/// One face of a word on the matching board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCard {
    pub text: String,
    pub pair_id: usize,
    pub state: CardState,
}

impl MatchCard {
    pub fn new(text: impl Into<String>, pair_id: usize) -> Self {
        Self {
            text: text.into(),
            pair_id,
            state: CardState::Idle,
        }
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Ai,
}

/// Entry of an AI chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
