//! Flashcard study loop.

use std::io::Write;

use tokio::io::{AsyncBufRead, Lines};
use vocab_core::{Side, StudySession};

use crate::error::Result;
use crate::state::AppState;

const HELP: &str = "[enter/n] next  [p] previous  [f] flip  [s] shuffle  [q] quit";

/// Walk through a set one card at a time until the user quits or input ends.
pub async fn run<R, W>(state: &AppState, set_id: &str, input: &mut Lines<R>, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let words = state.vocabulary.get_words(set_id)?;
    if words.is_empty() {
        writeln!(out, "Set '{set_id}' has no words.")?;
        return Ok(());
    }

    let mut session = StudySession::new(words);
    writeln!(out, "{HELP}")?;
    render(&session, out)?;

    while let Some(line) = input.next_line().await? {
        match line.trim() {
            "" | "n" => {
                session.next();
            }
            "p" => {
                session.previous();
            }
            "f" => {
                session.flip();
            }
            "s" => {
                session.shuffle(&mut rand::rng());
                writeln!(out, "Shuffled.")?;
            }
            "q" => break,
            other => {
                writeln!(out, "Unknown command '{other}'. {HELP}")?;
                continue;
            }
        }
        render(&session, out)?;
    }
    Ok(())
}

fn render<W: Write>(session: &StudySession, out: &mut W) -> Result<()> {
    let Some(word) = session.current() else {
        return Ok(());
    };
    let (index, total) = session.position();

    writeln!(out, "\n[{}/{}]", index + 1, total)?;
    match session.side() {
        Side::Front => {
            writeln!(out, "  {}", word.english)?;
            if !word.pronunciation.is_empty() {
                writeln!(out, "  {}", word.pronunciation)?;
            }
        }
        Side::Back => {
            writeln!(out, "  {}", word.vietnamese)?;
            if !word.example.is_empty() {
                writeln!(out, "  e.g. {}", word.example)?;
            }
            if !word.memory_tip.is_empty() {
                writeln!(out, "  tip: {}", word.memory_tip)?;
            }
        }
    }
    Ok(())
}
