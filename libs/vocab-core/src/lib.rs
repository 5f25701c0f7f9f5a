//! Core vocabulary library shared by the front ends.
//!
//! Provides:
//! - Shared types (Word, VocabularySet, MatchCard, CardState, etc.)
//! - Match-card deck builder and the matching game state machine
//! - Shipped + user vocabulary merge
//! - Flashcard study session
//! - Reader for model-generated vocabulary JSON

pub mod deck;
pub mod error;
pub mod game;
pub mod merge;
pub mod study;
pub mod types;
pub mod vocab_json;

pub use deck::{build_deck, MATCH_PAIR_COUNT};
pub use error::{CoreError, Result, VocabJsonError};
pub use game::{Continuation, Effect, MatchGame, MatchTiming, ScheduledContinuation};
pub use merge::merge_words;
pub use study::{Side, StudySession};
pub use types::{
    is_user_namespace, new_user_set_id, CardState, ChatMessage, MatchCard, Sender, SetKind,
    SetOrigin, VocabularySet, Word, WordEntry, WordId,
};
pub use vocab_json::parse_words;
