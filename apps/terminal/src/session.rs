//! Timed matching session.
//!
//! The session owns the game and is the only place that mutates it. Pending
//! delays run as tokio tasks that merely hand their continuation back; the
//! owner applies it in `next_due`. Dropping the session, calling `teardown`
//! or replaying aborts every outstanding timer.

use rand::Rng;
use tokio::task::JoinSet;
use vocab_core::{
    Effect, MatchCard, MatchGame, MatchTiming, ScheduledContinuation, Word, MATCH_PAIR_COUNT,
};

use crate::error::Result;

/// Something the front end should react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Shake the two cards of a wrong pair.
    Shake { positions: [usize; 2] },
    /// A pending pair settled; the board needs a redraw.
    Settled,
    /// The round is complete. Offer replay or exit.
    Completed,
}

/// A matching round driven by real timers.
pub struct MatchSession {
    game: MatchGame,
    words: Vec<Word>,
    timers: JoinSet<ScheduledContinuation>,
}

impl MatchSession {
    /// Start a session over the full word list of a set.
    pub fn start(words: Vec<Word>, timing: MatchTiming) -> Result<Self> {
        Self::start_with_rng(words, timing, &mut rand::rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        words: Vec<Word>,
        timing: MatchTiming,
        rng: &mut R,
    ) -> Result<Self> {
        let game = MatchGame::new(&words, MATCH_PAIR_COUNT, rng)?.with_timing(timing);
        tracing::debug!(words = words.len(), "match session started");
        Ok(Self {
            game,
            words,
            timers: JoinSet::new(),
        })
    }

    pub fn game(&self) -> &MatchGame {
        &self.game
    }

    pub fn cards(&self) -> &[MatchCard] {
        self.game.cards()
    }

    /// Whether a pending delay is still running.
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Forward a tap to the game and start any requested timer.
    pub fn tap(&mut self, position: usize) -> Vec<SessionEvent> {
        let effects = self.game.tap(position);
        self.apply(effects)
    }

    /// Wait for the next pending delay and apply its continuation.
    ///
    /// Continuations the game no longer accepts are skipped without an
    /// event. Returns `None` when nothing is pending.
    pub async fn next_due(&mut self) -> Option<Vec<SessionEvent>> {
        loop {
            match self.timers.join_next().await? {
                Ok(scheduled) => {
                    if !self.game.accepts(&scheduled) {
                        tracing::debug!(round = scheduled.round, "dropping stale continuation");
                        continue;
                    }
                    let effects = self.game.resume(scheduled);
                    let mut events = vec![SessionEvent::Settled];
                    events.extend(self.apply(effects));
                    return Some(events);
                }
                Err(e) if e.is_cancelled() => continue,
                Err(e) => {
                    tracing::error!("match timer failed: {}", e);
                    continue;
                }
            }
        }
    }

    /// Throw the current round away and deal a new one from the full list.
    pub fn replay(&mut self) -> Result<()> {
        self.replay_with_rng(&mut rand::rng())
    }

    pub fn replay_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.timers.abort_all();
        self.game.replay(&self.words, rng)?;
        tracing::debug!(round = self.game.round(), "match session replayed");
        Ok(())
    }

    /// Cancel every pending timer.
    pub fn teardown(&mut self) {
        self.timers.abort_all();
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for effect in effects {
            match effect {
                Effect::Shake { positions } => events.push(SessionEvent::Shake { positions }),
                Effect::Schedule(scheduled) => {
                    self.timers.spawn(async move {
                        tokio::time::sleep(scheduled.delay).await;
                        scheduled
                    });
                }
                Effect::Completed => events.push(SessionEvent::Completed),
            }
        }
        events
    }
}

impl Drop for MatchSession {
    fn drop(&mut self) {
        self.timers.abort_all();
    }
}
