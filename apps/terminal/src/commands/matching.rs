//! Matching game loop.
//!
//! Input lines are 1-based card numbers. Timers and input are raced with
//! `select!`; a settled timer is always handled before queued input.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufRead, Lines};
use vocab_core::{CardState, MatchTiming};

use crate::error::Result;
use crate::session::{MatchSession, SessionEvent};
use crate::state::AppState;

/// Play rounds on a set until the user quits. Returns the number of
/// completed rounds.
pub async fn run<R, W>(
    state: &AppState,
    set_id: &str,
    timing: MatchTiming,
    input: &mut Lines<R>,
    out: &mut W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut rng = StdRng::from_rng(&mut rand::rng());
    run_with_rng(state, set_id, timing, &mut rng, input, out).await
}

/// Same as [`run`], dealing every round from `rng`.
pub async fn run_with_rng<G, R, W>(
    state: &AppState,
    set_id: &str,
    timing: MatchTiming,
    rng: &mut G,
    input: &mut Lines<R>,
    out: &mut W,
) -> Result<usize>
where
    G: Rng + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let words = state.vocabulary.ensure_playable(set_id)?;
    let mut session = MatchSession::start_with_rng(words, timing, &mut *rng)?;
    let mut completed = 0;

    writeln!(out, "Match each English word with its meaning. Enter a card number, or q to quit.")?;
    render(&session, out)?;

    loop {
        let events = tokio::select! {
            biased;
            Some(events) = session.next_due(), if session.has_pending() => events,
            line = input.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "q" => break,
                    text => match text.parse::<usize>() {
                        Ok(n) if (1..=session.cards().len()).contains(&n) => session.tap(n - 1),
                        _ => {
                            writeln!(out, "Enter a number from 1 to {}.", session.cards().len())?;
                            continue;
                        }
                    },
                }
            }
        };

        for event in &events {
            if let SessionEvent::Shake { positions } = event {
                writeln!(out, "Not a pair: {} and {}", positions[0] + 1, positions[1] + 1)?;
            }
        }
        render(&session, out)?;

        if events.contains(&SessionEvent::Completed) {
            completed += 1;
            writeln!(out, "\nAll pairs matched! [r] play again  [q] quit")?;
            if !ask_replay(input, out).await? {
                break;
            }
            session.replay_with_rng(&mut *rng)?;
            render(&session, out)?;
        }
    }

    session.teardown();
    tracing::debug!(set_id, completed, "match finished");
    Ok(completed)
}

/// Only `r` and `q` are accepted. End of input counts as quit.
async fn ask_replay<R, W>(input: &mut Lines<R>, out: &mut W) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    while let Some(line) = input.next_line().await? {
        match line.trim() {
            "r" => return Ok(true),
            "q" => return Ok(false),
            _ => writeln!(out, "Enter r or q.")?,
        }
    }
    Ok(false)
}

fn render<W: Write>(session: &MatchSession, out: &mut W) -> Result<()> {
    let game = session.game();
    writeln!(out, "\nMatched {}/{}", game.matched_count(), game.pair_count())?;

    for (i, card) in session.cards().iter().enumerate() {
        let label = match card.state {
            CardState::Idle => format!("  {}", card.text),
            CardState::Selected => format!("> {}", card.text),
            CardState::CorrectPending => format!("= {}", card.text),
            CardState::WrongPending => format!("x {}", card.text),
            CardState::Resolved => "  ---".to_string(),
        };
        write!(out, "{:>3}) {:<24}", i + 1, label)?;
        if i % 2 == 1 {
            writeln!(out)?;
        }
    }
    if session.cards().len() % 2 == 1 {
        writeln!(out)?;
    }
    Ok(())
}
