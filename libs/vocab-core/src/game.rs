//! Matching game state machine.
//!
//! The game owns the board and its counters. Taps and delayed continuations
//! are the only inputs; each returns the effects the caller must carry out
//! (shake cue, scheduling a continuation, completion signal). Timers live
//! outside this module.

use crate::deck::build_deck;
use crate::error::Result;
use crate::types::{CardState, MatchCard, Word};
use rand::Rng;
use std::time::Duration;

/// Delays that hold the pending states on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTiming {
    /// How long a correct pair stays highlighted before it is removed.
    pub match_delay: Duration,
    /// How long a wrong pair stays highlighted before it flips back.
    pub mismatch_delay: Duration,
}

impl Default for MatchTiming {
    fn default() -> Self {
        Self {
            match_delay: Duration::from_millis(500),
            mismatch_delay: Duration::from_millis(1000),
        }
    }
}

/// Work to perform once a pending delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    ResolveMatch { first: usize, second: usize },
    ResetMismatch { first: usize, second: usize },
}

/// A continuation bound to the round that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledContinuation {
    pub round: u64,
    pub delay: Duration,
    pub continuation: Continuation,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Cosmetic cue for a wrong pair. No state impact.
    Shake { positions: [usize; 2] },
    /// Run `resume` with this continuation after its delay.
    Schedule(ScheduledContinuation),
    /// Every pair is resolved. Emitted once per round.
    Completed,
}

/// State of one matching round.
#[derive(Debug, Clone)]
pub struct MatchGame {
    cards: Vec<MatchCard>,
    pair_count: usize,
    first_pick: Option<usize>,
    matched_count: usize,
    locked: bool,
    completed: bool,
    round: u64,
    timing: MatchTiming,
}

impl MatchGame {
    /// Start a round with `pair_count` pairs drawn from `words`.
    pub fn new<R: Rng + ?Sized>(words: &[Word], pair_count: usize, rng: &mut R) -> Result<Self> {
        let cards = build_deck(words, pair_count, rng)?;
        Ok(Self {
            cards,
            pair_count,
            first_pick: None,
            matched_count: 0,
            locked: false,
            completed: false,
            round: 0,
            timing: MatchTiming::default(),
        })
    }

    pub fn with_timing(mut self, timing: MatchTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Discard the current round and deal a fresh one.
    ///
    /// Continuations scheduled by the old round become no-ops. On error the
    /// current round is left as it was.
    pub fn replay<R: Rng + ?Sized>(&mut self, words: &[Word], rng: &mut R) -> Result<()> {
        let cards = build_deck(words, self.pair_count, rng)?;
        self.cards = cards;
        self.first_pick = None;
        self.matched_count = 0;
        self.locked = false;
        self.completed = false;
        self.round += 1;
        Ok(())
    }

    /// Handle a tap on the card at `position`.
    pub fn tap(&mut self, position: usize) -> Vec<Effect> {
        if self.locked {
            return Vec::new();
        }
        let Some(card) = self.cards.get(position) else {
            return Vec::new();
        };
        if !card.state.is_selectable() {
            return Vec::new();
        }

        let Some(first) = self.first_pick else {
            self.first_pick = Some(position);
            self.cards[position].state = CardState::Selected;
            return Vec::new();
        };

        self.locked = true;
        self.cards[position].state = CardState::Selected;

        if self.cards[first].pair_id == self.cards[position].pair_id {
            self.cards[first].state = CardState::CorrectPending;
            self.cards[position].state = CardState::CorrectPending;
            vec![self.schedule(
                self.timing.match_delay,
                Continuation::ResolveMatch {
                    first,
                    second: position,
                },
            )]
        } else {
            self.cards[first].state = CardState::WrongPending;
            self.cards[position].state = CardState::WrongPending;
            vec![
                Effect::Shake {
                    positions: [first, position],
                },
                self.schedule(
                    self.timing.mismatch_delay,
                    Continuation::ResetMismatch {
                        first,
                        second: position,
                    },
                ),
            ]
        }
    }

    /// Apply a continuation whose delay has elapsed.
    pub fn resume(&mut self, scheduled: ScheduledContinuation) -> Vec<Effect> {
        if !self.accepts(&scheduled) {
            return Vec::new();
        }

        match scheduled.continuation {
            Continuation::ResolveMatch { first, second } => {
                self.cards[first].state = CardState::Resolved;
                self.cards[second].state = CardState::Resolved;
                self.matched_count += 1;
                self.first_pick = None;
                self.locked = false;

                if self.matched_count == self.pair_count && !self.completed {
                    self.completed = true;
                    return vec![Effect::Completed];
                }
                Vec::new()
            }
            Continuation::ResetMismatch { first, second } => {
                self.cards[first].state = CardState::Idle;
                self.cards[second].state = CardState::Idle;
                self.first_pick = None;
                self.locked = false;
                Vec::new()
            }
        }
    }

    /// Whether `resume` would act on this continuation: it belongs to the
    /// current round and both cards still wait in the matching pending state.
    pub fn accepts(&self, scheduled: &ScheduledContinuation) -> bool {
        if scheduled.round != self.round {
            return false;
        }
        match scheduled.continuation {
            Continuation::ResolveMatch { first, second } => {
                self.both_in(first, second, CardState::CorrectPending)
            }
            Continuation::ResetMismatch { first, second } => {
                self.both_in(first, second, CardState::WrongPending)
            }
        }
    }

    fn schedule(&self, delay: Duration, continuation: Continuation) -> Effect {
        Effect::Schedule(ScheduledContinuation {
            round: self.round,
            delay,
            continuation,
        })
    }

    fn both_in(&self, first: usize, second: usize, state: CardState) -> bool {
        let is = |i: usize| self.cards.get(i).map(|c| c.state) == Some(state);
        is(first) && is(second)
    }

    /// Read-only view of the board.
    pub fn cards(&self) -> &[MatchCard] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Option<&MatchCard> {
        self.cards.get(position)
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    pub fn first_pick(&self) -> Option<usize> {
        self.first_pick
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn timing(&self) -> MatchTiming {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::MATCH_PAIR_COUNT;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_words() -> Vec<Word> {
        vec![
            Word::new("cat", "mèo"),
            Word::new("dog", "chó"),
            Word::new("sun", "mặt trời"),
            Word::new("moon", "trăng"),
            Word::new("star", "sao"),
            Word::new("tree", "cây"),
        ]
    }

    /// A round whose board holds the first five sample words.
    fn new_game(seed: u64) -> MatchGame {
        let words = sample_words()[..5].to_vec();
        let mut rng = StdRng::seed_from_u64(seed);
        MatchGame::new(&words, MATCH_PAIR_COUNT, &mut rng).unwrap()
    }

    fn position_of(game: &MatchGame, text: &str) -> usize {
        game.cards()
            .iter()
            .position(|c| c.text == text)
            .unwrap_or_else(|| panic!("no card {text}"))
    }

    fn scheduled(effects: &[Effect]) -> ScheduledContinuation {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Schedule(s) => Some(*s),
                _ => None,
            })
            .expect("a continuation was scheduled")
    }

    fn snapshot(game: &MatchGame) -> (Vec<CardState>, Option<usize>, usize, bool) {
        (
            game.cards().iter().map(|c| c.state).collect(),
            game.first_pick(),
            game.matched_count(),
            game.is_locked(),
        )
    }

    fn match_pair(game: &mut MatchGame, english: &str, vietnamese: &str) -> Vec<Effect> {
        let a = position_of(game, english);
        let b = position_of(game, vietnamese);
        assert!(game.tap(a).is_empty());
        let effects = game.tap(b);
        game.resume(scheduled(&effects))
    }

    #[test]
    fn first_tap_selects_card() {
        let mut game = new_game(1);
        let cat = position_of(&game, "cat");

        assert!(game.tap(cat).is_empty());
        assert_eq!(game.card(cat).unwrap().state, CardState::Selected);
        assert_eq!(game.first_pick(), Some(cat));
        assert!(!game.is_locked());
    }

    #[test]
    fn matching_pair_goes_pending_then_resolved() {
        let mut game = new_game(2);
        let cat = position_of(&game, "cat");
        let meo = position_of(&game, "mèo");

        game.tap(cat);
        let effects = game.tap(meo);

        assert_eq!(game.card(cat).unwrap().state, CardState::CorrectPending);
        assert_eq!(game.card(meo).unwrap().state, CardState::CorrectPending);
        assert!(game.is_locked());
        let next = scheduled(&effects);
        assert_eq!(next.delay, Duration::from_millis(500));
        assert_eq!(effects.len(), 1);

        assert!(game.resume(next).is_empty());
        assert_eq!(game.card(cat).unwrap().state, CardState::Resolved);
        assert_eq!(game.card(meo).unwrap().state, CardState::Resolved);
        assert_eq!(game.matched_count(), 1);
        assert_eq!(game.first_pick(), None);
        assert!(!game.is_locked());
    }

    #[test]
    fn mismatch_shakes_then_returns_to_idle() {
        let mut game = new_game(3);
        let dog = position_of(&game, "dog");
        let sao = position_of(&game, "sao");

        game.tap(dog);
        let effects = game.tap(sao);

        assert_eq!(game.card(dog).unwrap().state, CardState::WrongPending);
        assert_eq!(game.card(sao).unwrap().state, CardState::WrongPending);
        assert!(effects.contains(&Effect::Shake {
            positions: [dog, sao]
        }));
        let next = scheduled(&effects);
        assert_eq!(next.delay, Duration::from_millis(1000));

        assert!(game.resume(next).is_empty());
        assert_eq!(game.card(dog).unwrap().state, CardState::Idle);
        assert_eq!(game.card(sao).unwrap().state, CardState::Idle);
        assert_eq!(game.matched_count(), 0);
        assert!(!game.is_locked());
    }

    #[test]
    fn example_scenario() {
        let words = sample_words();
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = MatchGame::new(&words, MATCH_PAIR_COUNT, &mut rng).unwrap();
        assert_eq!(game.cards().len(), 10);

        // Any five of the six words may be dealt; pick two that are on the board.
        let dealt: Vec<&Word> = words
            .iter()
            .filter(|w| game.cards().iter().any(|c| c.text == w.english))
            .collect();
        let (a, b) = (dealt[0].clone(), dealt[1].clone());

        match_pair(&mut game, &a.english, &a.vietnamese);
        assert_eq!(game.matched_count(), 1);

        let x = position_of(&game, &b.english);
        let y = position_of(&game, &dealt[2].vietnamese);
        game.tap(x);
        let effects = game.tap(y);
        assert_eq!(game.card(x).unwrap().state, CardState::WrongPending);
        game.resume(scheduled(&effects));
        assert_eq!(game.card(x).unwrap().state, CardState::Idle);
        assert_eq!(game.card(y).unwrap().state, CardState::Idle);
        assert_eq!(game.matched_count(), 1);
    }

    #[test]
    fn taps_while_locked_change_nothing() {
        let mut game = new_game(4);
        let cat = position_of(&game, "cat");
        let meo = position_of(&game, "mèo");
        let dog = position_of(&game, "dog");

        game.tap(cat);
        let effects = game.tap(meo);
        let before = snapshot(&game);

        assert!(game.tap(dog).is_empty());
        assert!(game.tap(cat).is_empty());
        assert_eq!(snapshot(&game), before);

        game.resume(scheduled(&effects));
        assert_eq!(game.card(dog).unwrap().state, CardState::Idle);
    }

    #[test]
    fn taps_on_resolved_or_selected_cards_are_ignored() {
        let mut game = new_game(5);
        match_pair(&mut game, "cat", "mèo");
        let cat = position_of(&game, "cat");
        let before = snapshot(&game);
        assert!(game.tap(cat).is_empty());
        assert_eq!(snapshot(&game), before);

        let dog = position_of(&game, "dog");
        game.tap(dog);
        let before = snapshot(&game);
        assert!(game.tap(dog).is_empty());
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn out_of_range_tap_is_ignored() {
        let mut game = new_game(6);
        let before = snapshot(&game);
        assert!(game.tap(99).is_empty());
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn completion_fires_once_on_last_pair() {
        let words = sample_words()[..5].to_vec();
        let mut game = new_game(7);

        for (i, word) in words.iter().enumerate() {
            let effects = match_pair(&mut game, &word.english, &word.vietnamese);
            if i < 4 {
                assert!(effects.is_empty(), "completed early after pair {i}");
                assert!(!game.is_complete());
            } else {
                assert_eq!(effects, vec![Effect::Completed]);
            }
        }
        assert!(game.is_complete());
        assert_eq!(game.matched_count(), 5);
        assert!(game.cards().iter().all(|c| c.state == CardState::Resolved));

        for position in 0..game.cards().len() {
            assert!(game.tap(position).is_empty());
        }
    }

    #[test]
    fn duplicate_continuation_is_ignored() {
        let mut game = new_game(8);
        let cat = position_of(&game, "cat");
        let meo = position_of(&game, "mèo");
        game.tap(cat);
        let next = scheduled(&game.tap(meo));

        assert!(game.accepts(&next));
        game.resume(next);
        let before = snapshot(&game);
        assert!(!game.accepts(&next));
        assert!(game.resume(next).is_empty());
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.matched_count(), 1);
    }

    #[test]
    fn replay_resets_state_and_invalidates_pending_work() {
        let words = sample_words();
        let mut rng = StdRng::seed_from_u64(9);
        let mut game = MatchGame::new(&words, MATCH_PAIR_COUNT, &mut rng).unwrap();

        let first = game.cards()[0].clone();
        let partner = game
            .cards()
            .iter()
            .position(|c| c.pair_id == first.pair_id && c.text != first.text)
            .unwrap();
        game.tap(0);
        let stale = scheduled(&game.tap(partner));

        game.replay(&words, &mut rng).unwrap();
        assert_eq!(game.round(), 1);
        assert_eq!(game.matched_count(), 0);
        assert_eq!(game.first_pick(), None);
        assert!(!game.is_locked());
        assert!(!game.is_complete());
        assert_eq!(game.cards().len(), 10);
        assert!(game.cards().iter().all(|c| c.state == CardState::Idle));

        let before = snapshot(&game);
        assert!(!game.accepts(&stale));
        assert!(game.resume(stale).is_empty());
        assert_eq!(snapshot(&game), before);
    }

    #[test]
    fn replay_after_completion_starts_over() {
        let words = sample_words()[..5].to_vec();
        let mut game = new_game(10);
        for word in &words {
            match_pair(&mut game, &word.english, &word.vietnamese);
        }
        assert!(game.is_complete());

        let mut rng = StdRng::seed_from_u64(10);
        game.replay(&words, &mut rng).unwrap();
        assert!(!game.is_complete());

        for (i, word) in words.iter().enumerate() {
            let effects = match_pair(&mut game, &word.english, &word.vietnamese);
            assert_eq!(effects.contains(&Effect::Completed), i == 4);
        }
    }

    #[test]
    fn failed_replay_keeps_current_round() {
        let mut game = new_game(12);
        let cat = position_of(&game, "cat");
        game.tap(cat);
        let before = snapshot(&game);

        let mut rng = StdRng::seed_from_u64(12);
        assert!(game.replay(&sample_words()[..2], &mut rng).is_err());
        assert_eq!(snapshot(&game), before);
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn at_most_one_selected_card_when_unlocked() {
        let mut game = new_game(13);
        let mut rng = StdRng::seed_from_u64(13);
        let mut pending: Vec<ScheduledContinuation> = Vec::new();

        for _ in 0..500 {
            if !pending.is_empty() && rng.random_bool(0.4) {
                let next = pending.remove(0);
                game.resume(next);
            } else {
                let position = rng.random_range(0..game.cards().len() + 2);
                for effect in game.tap(position) {
                    if let Effect::Schedule(s) = effect {
                        pending.push(s);
                    }
                }
            }

            if !game.is_locked() {
                let selected = game
                    .cards()
                    .iter()
                    .filter(|c| c.state == CardState::Selected)
                    .count();
                assert!(selected <= 1);
                assert!(game.cards().iter().all(|c| !c.state.is_pending()));
            }
            assert!(pending.len() <= 1);
        }
    }

    #[test]
    fn custom_timing_is_used_for_schedules() {
        let timing = MatchTiming {
            match_delay: Duration::from_millis(10),
            mismatch_delay: Duration::from_millis(20),
        };
        let mut game = new_game(14).with_timing(timing);
        game.tap(position_of(&game, "cat"));
        let effects = game.tap(position_of(&game, "chó"));
        assert_eq!(scheduled(&effects).delay, Duration::from_millis(20));
    }
}
