//! Vocabulary source merge: shipped words followed by user-added words.

use crate::types::{Word, WordEntry};

/// Union shipped words and user entries for one set.
///
/// Shipped words keep file order, user words keep storage order. Nothing is
/// de-duplicated: a pair present in both sources appears twice.
pub fn merge_words(shipped: Vec<Word>, user: &[WordEntry]) -> Vec<Word> {
    let mut words = shipped;
    words.reserve(user.len());
    words.extend(user.iter().map(|entry| entry.word.clone()));
    words
}
