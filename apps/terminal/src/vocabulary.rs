//! Vocabulary service: shipped catalog plus the user's word store.

use crate::catalog::Catalog;
use crate::db::{SetRepository, UserSet, WordRepository};
use crate::error::{AppError, Result};
use vocab_core::{
    merge_words, new_user_set_id, CoreError, SetKind, SetOrigin, VocabularySet, Word, WordEntry,
    WordId, MATCH_PAIR_COUNT,
};

/// A listed set together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SetSummary {
    #[serde(flatten)]
    pub set: VocabularySet,
    pub origin: SetOrigin,
}

/// Read and edit vocabulary across both sources.
pub struct Vocabulary<R> {
    repo: R,
    catalog: Catalog,
}

impl<R> Vocabulary<R>
where
    R: SetRepository + WordRepository,
{
    pub fn new(repo: R, catalog: Catalog) -> Self {
        Self { repo, catalog }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Provenance of a set id, `None` when neither source knows it.
    pub fn origin(&self, set_id: &str) -> Result<Option<SetOrigin>> {
        if self.repo.is_user_created(set_id)? {
            Ok(Some(SetOrigin::User))
        } else if self.catalog.contains(set_id) {
            Ok(Some(SetOrigin::Shipped))
        } else {
            Ok(None)
        }
    }

    /// Title of a known set.
    pub fn title(&self, set_id: &str) -> Result<Option<String>> {
        if let Some(set) = self.repo.get_user_set(set_id)? {
            return Ok(Some(set.title));
        }
        Ok(self.catalog.get(set_id).map(|s| s.title.to_string()))
    }

    /// All words of a set: shipped words first, then user-added words.
    ///
    /// An unknown set yields an empty list.
    pub fn get_words(&self, set_id: &str) -> Result<Vec<Word>> {
        let shipped = if self.repo.is_user_created(set_id)? {
            Vec::new()
        } else {
            self.catalog.words(set_id)
        };
        let user = self.repo.get_words(set_id)?;
        Ok(merge_words(shipped, &user))
    }

    pub fn get_word_count(&self, set_id: &str) -> Result<usize> {
        Ok(self.get_words(set_id)?.len())
    }

    /// Words the user added to a set, with their ids.
    pub fn user_words(&self, set_id: &str) -> Result<Vec<WordEntry>> {
        Ok(self.repo.get_words(set_id)?)
    }

    pub fn get_word(&self, id: WordId) -> Result<Option<WordEntry>> {
        Ok(self.repo.get_word(id)?)
    }

    /// Shipped sets in catalog order, then user sets in creation order.
    pub fn list_sets(&self) -> Result<Vec<SetSummary>> {
        let mut summaries = Vec::new();

        for shipped in self.catalog.sets() {
            summaries.push(SetSummary {
                set: VocabularySet {
                    title: shipped.title.to_string(),
                    set_id: shipped.set_id.to_string(),
                    word_count: self.get_word_count(shipped.set_id)?,
                },
                origin: SetOrigin::Shipped,
            });
        }

        for user in self.repo.list_user_sets()? {
            let word_count = self.repo.count_words(&user.set_id)?;
            summaries.push(SetSummary {
                set: VocabularySet {
                    title: user.title,
                    set_id: user.set_id,
                    word_count,
                },
                origin: SetOrigin::User,
            });
        }

        Ok(summaries)
    }

    /// Register a new, empty user set.
    pub fn create_set(&self, title: &str, kind: SetKind) -> Result<VocabularySet> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest("title must not be empty".into()));
        }

        let set_id = new_user_set_id(kind);
        if self.catalog.contains(&set_id) {
            return Err(AppError::ReservedSetId(set_id));
        }
        self.repo.add_set(&UserSet::new(set_id.clone(), title))?;
        tracing::info!(%set_id, "created vocabulary set");

        Ok(VocabularySet {
            title: title.to_string(),
            set_id,
            word_count: 0,
        })
    }

    /// Store a generated word list as a new set.
    pub fn save_generated(&self, title: &str, words: &[Word]) -> Result<VocabularySet> {
        let mut set = self.create_set(title, SetKind::Generated)?;
        self.repo.add_words(&set.set_id, words)?;
        set.word_count = words.len();
        Ok(set)
    }

    pub fn rename_set(&self, set_id: &str, title: &str) -> Result<()> {
        self.require_user_set(set_id)?;
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::BadRequest("title must not be empty".into()));
        }
        self.repo.rename_set(set_id, title)?;
        Ok(())
    }

    /// Delete a user set and its words. Returns the number of words removed.
    pub fn delete_set(&self, set_id: &str) -> Result<usize> {
        self.require_user_set(set_id)?;
        let removed = self.repo.delete_set(set_id)?;
        tracing::info!(set_id, removed, "deleted vocabulary set");
        Ok(removed)
    }

    /// Append a word to any known set, shipped ones included.
    pub fn add_word(&self, set_id: &str, word: &Word) -> Result<WordEntry> {
        if self.origin(set_id)?.is_none() {
            return Err(AppError::UnknownSet(set_id.to_string()));
        }
        validate_word(word)?;
        Ok(self.repo.add_word(set_id, word)?)
    }

    pub fn update_word(&self, id: WordId, word: &Word) -> Result<()> {
        validate_word(word)?;
        Ok(self.repo.update_word(id, word)?)
    }

    pub fn delete_word(&self, id: WordId) -> Result<()> {
        Ok(self.repo.delete_word(id)?)
    }

    /// Words for a matching round, or why a round cannot start.
    pub fn ensure_playable(&self, set_id: &str) -> Result<Vec<Word>> {
        let words = self.get_words(set_id)?;
        if words.len() < MATCH_PAIR_COUNT {
            return Err(CoreError::InsufficientWords {
                required: MATCH_PAIR_COUNT,
                available: words.len(),
            }
            .into());
        }
        Ok(words)
    }

    fn require_user_set(&self, set_id: &str) -> Result<()> {
        match self.origin(set_id)? {
            Some(SetOrigin::User) => Ok(()),
            Some(SetOrigin::Shipped) => Err(AppError::ReadOnlySet(set_id.to_string())),
            None => Err(AppError::UnknownSet(set_id.to_string())),
        }
    }
}

fn validate_word(word: &Word) -> Result<()> {
    if word.english.trim().is_empty() || word.vietnamese.trim().is_empty() {
        return Err(AppError::BadRequest(
            "english and vietnamese must not be empty".into(),
        ));
    }
    Ok(())
}
