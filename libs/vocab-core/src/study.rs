//! Flashcard study session: walk a word list one card at a time.

use crate::types::Word;
use rand::seq::SliceRandom;
use rand::Rng;

/// Which side of the flashcard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

/// Cursor over a word list with a flip flag.
#[derive(Debug, Clone)]
pub struct StudySession {
    words: Vec<Word>,
    index: usize,
    side: Side,
}

impl StudySession {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            index: 0,
            side: Side::Front,
        }
    }

    /// Word under the cursor, `None` for an empty session.
    pub fn current(&self) -> Option<&Word> {
        self.words.get(self.index)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Zero-based index and total length.
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.words.len())
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Advance, wrapping from the last card to the first.
    pub fn next(&mut self) -> Option<&Word> {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
        self.side = Side::Front;
        self.current()
    }

    /// Step back, wrapping from the first card to the last.
    pub fn previous(&mut self) -> Option<&Word> {
        if !self.words.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.words.len() - 1);
        }
        self.side = Side::Front;
        self.current()
    }

    /// Turn the card over.
    pub fn flip(&mut self) -> Side {
        self.side = match self.side {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        };
        self.side
    }

    /// Reorder the session's words and restart from the first card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
        self.index = 0;
        self.side = Side::Front;
    }
}
