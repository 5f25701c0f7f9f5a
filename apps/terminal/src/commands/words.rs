//! Word commands.

use std::io::Write;

use clap::Args;
use vocab_core::{Word, WordEntry, WordId};

use crate::db::DbError;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Word fields given on the command line. Omitted fields stay unchanged on edit.
#[derive(Debug, Clone, Default, Args)]
pub struct WordFields {
    /// English word
    #[arg(short, long)]
    pub english: Option<String>,

    /// Vietnamese meaning
    #[arg(short, long)]
    pub vietnamese: Option<String>,

    /// IPA pronunciation
    #[arg(short, long)]
    pub pronunciation: Option<String>,

    /// Example sentence
    #[arg(short = 'x', long)]
    pub example: Option<String>,

    /// Memory tip
    #[arg(short, long)]
    pub memory_tip: Option<String>,
}

impl WordFields {
    /// Overlay the given fields onto `word`.
    pub fn apply(self, mut word: Word) -> Word {
        if let Some(english) = self.english {
            word.english = english;
        }
        if let Some(vietnamese) = self.vietnamese {
            word.vietnamese = vietnamese;
        }
        if let Some(pronunciation) = self.pronunciation {
            word.pronunciation = pronunciation;
        }
        if let Some(example) = self.example {
            word.example = example;
        }
        if let Some(memory_tip) = self.memory_tip {
            word.memory_tip = memory_tip;
        }
        word
    }
}

/// Print a set's words. Words you added are listed with their id.
pub fn list<W: Write>(state: &AppState, set_id: &str, out: &mut W) -> Result<()> {
    if state.vocabulary.origin(set_id)?.is_none() {
        return Err(AppError::UnknownSet(set_id.to_string()));
    }

    let words = state.vocabulary.get_words(set_id)?;
    let added = state.vocabulary.user_words(set_id)?;
    let shipped = words.len() - added.len();

    for (i, word) in words[..shipped].iter().enumerate() {
        writeln!(out, "{:>3}. {}", i + 1, describe(word))?;
    }
    for (i, entry) in added.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {}  [{}]",
            shipped + i + 1,
            describe(&entry.word),
            entry.id
        )?;
    }
    if words.is_empty() {
        writeln!(out, "No words yet.")?;
    }
    Ok(())
}

pub fn add<W: Write>(
    state: &AppState,
    set_id: &str,
    fields: WordFields,
    out: &mut W,
) -> Result<WordEntry> {
    let word = fields.apply(Word::new("", ""));
    let entry = state.vocabulary.add_word(set_id, &word)?;
    writeln!(out, "Added '{}' ({})", entry.word.english, entry.id)?;
    Ok(entry)
}

pub fn edit<W: Write>(state: &AppState, id: &str, fields: WordFields, out: &mut W) -> Result<Word> {
    let id = parse_id(id)?;
    let current = state
        .vocabulary
        .get_word(id)?
        .ok_or(DbError::WordNotFound(id))?;

    let word = fields.apply(current.word);
    state.vocabulary.update_word(id, &word)?;
    writeln!(out, "Updated {id}")?;
    Ok(word)
}

pub fn delete<W: Write>(state: &AppState, id: &str, out: &mut W) -> Result<()> {
    let id = parse_id(id)?;
    state.vocabulary.delete_word(id)?;
    writeln!(out, "Deleted {id}")?;
    Ok(())
}

fn parse_id(id: &str) -> Result<WordId> {
    WordId::parse(id).ok_or_else(|| AppError::BadRequest(format!("not a word id: {id}")))
}

fn describe(word: &Word) -> String {
    let mut line = format!("{} - {}", word.english, word.vietnamese);
    if !word.pronunciation.is_empty() {
        line.push_str(&format!(" {}", word.pronunciation));
    }
    line
}
