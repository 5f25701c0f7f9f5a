//! Deck building for the matching game.

use crate::error::{CoreError, Result};
use crate::types::{MatchCard, Word};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of pairs on the board in one round.
pub const MATCH_PAIR_COUNT: usize = 5;

/// Build a shuffled deck of `pair_count` word pairs.
///
/// A random subset of `words` is chosen; each chosen word contributes an
/// English card and a Vietnamese card sharing its index as `pair_id`. The
/// caller's slice is left untouched.
pub fn build_deck<R: Rng + ?Sized>(
    words: &[Word],
    pair_count: usize,
    rng: &mut R,
) -> Result<Vec<MatchCard>> {
    if pair_count == 0 {
        return Err(CoreError::ZeroPairs);
    }
    if words.len() < pair_count {
        return Err(CoreError::InsufficientWords {
            required: pair_count,
            available: words.len(),
        });
    }

    let mut pool: Vec<&Word> = words.iter().collect();
    pool.shuffle(rng);

    let mut cards = Vec::with_capacity(pair_count * 2);
    for (pair_id, word) in pool.into_iter().take(pair_count).enumerate() {
        cards.push(MatchCard::new(word.english.clone(), pair_id));
        cards.push(MatchCard::new(word.vietnamese.clone(), pair_id));
    }

    cards.shuffle(rng);
    Ok(cards)
}
