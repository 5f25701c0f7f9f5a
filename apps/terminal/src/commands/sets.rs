//! Set management commands.

use std::io::Write;

use vocab_core::{SetKind, SetOrigin, VocabularySet};

use crate::error::Result;
use crate::state::AppState;

/// Print every set, shipped first.
pub fn list<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let sets = state.vocabulary.list_sets()?;
    for summary in &sets {
        let marker = match summary.origin {
            SetOrigin::Shipped => ' ',
            SetOrigin::User => '*',
        };
        writeln!(
            out,
            "{marker} {:<42} {:>4} words  {}",
            summary.set.set_id, summary.set.word_count, summary.set.title
        )?;
    }
    if sets.iter().any(|s| s.origin == SetOrigin::User) {
        writeln!(out, "\n* created by you")?;
    }
    Ok(())
}

pub fn add<W: Write>(state: &AppState, title: &str, out: &mut W) -> Result<VocabularySet> {
    let set = state.vocabulary.create_set(title, SetKind::Manual)?;
    writeln!(out, "Created set '{}' ({})", set.title, set.set_id)?;
    Ok(set)
}

pub fn rename<W: Write>(state: &AppState, set_id: &str, title: &str, out: &mut W) -> Result<()> {
    state.vocabulary.rename_set(set_id, title)?;
    writeln!(out, "Renamed {set_id} to '{}'", title.trim())?;
    Ok(())
}

pub fn delete<W: Write>(state: &AppState, set_id: &str, out: &mut W) -> Result<()> {
    let removed = state.vocabulary.delete_set(set_id)?;
    writeln!(out, "Deleted {set_id} and {removed} word(s)")?;
    Ok(())
}
