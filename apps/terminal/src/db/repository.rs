//! Repository pattern for database access.

use crate::db::error::DbError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::{Word, WordEntry, WordId};

type Result<T> = std::result::Result<T, DbError>;

/// A row of the user-created set registry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserSet {
    pub set_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl UserSet {
    pub fn new(set_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            set_id: set_id.into(),
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

/// Repository for the user-created set registry.
pub trait SetRepository {
    fn list_user_sets(&self) -> Result<Vec<UserSet>>;
    fn get_user_set(&self, set_id: &str) -> Result<Option<UserSet>>;
    fn is_user_created(&self, set_id: &str) -> Result<bool>;
    fn add_set(&self, set: &UserSet) -> Result<()>;
    fn rename_set(&self, set_id: &str, title: &str) -> Result<()>;
    fn delete_set(&self, set_id: &str) -> Result<usize>;
}

/// Repository for user-added words.
pub trait WordRepository {
    fn get_words(&self, set_id: &str) -> Result<Vec<WordEntry>>;
    fn get_word(&self, id: WordId) -> Result<Option<WordEntry>>;
    fn count_words(&self, set_id: &str) -> Result<usize>;
    fn add_word(&self, set_id: &str, word: &Word) -> Result<WordEntry>;
    fn add_words(&self, set_id: &str, words: &[Word]) -> Result<Vec<WordEntry>>;
    fn update_word(&self, id: WordId, word: &Word) -> Result<()>;
    fn delete_word(&self, id: WordId) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_SCHEMA_VERSION)?;
        Ok(())
    }

    fn insert_word(&self, set_id: &str, word: &Word) -> Result<WordEntry> {
        let entry = WordEntry::new(word.clone());
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO words (id, set_id, position, english, vietnamese, pronunciation, example, memory_tip, created_at)
             VALUES (?1, ?2, (SELECT COALESCE(MAX(position) + 1, 0) FROM words WHERE set_id = ?2), ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.id.to_string(),
                set_id,
                word.english,
                word.vietnamese,
                word.pronunciation,
                word.example,
                word.memory_tip,
                now,
            ],
        )?;
        Ok(entry)
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<WordEntry> {
        let id_str: String = row.get(0)?;
        let id = WordId::parse(&id_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("invalid word id: {id_str}").into(),
            )
        })?;
        Ok(WordEntry {
            id,
            word: Word {
                english: row.get(1)?,
                vietnamese: row.get(2)?,
                pronunciation: row.get(3)?,
                example: row.get(4)?,
                memory_tip: row.get(5)?,
            },
        })
    }

    fn row_to_set(row: &rusqlite::Row) -> rusqlite::Result<UserSet> {
        let created_at: String = row.get(2)?;
        Ok(UserSet {
            set_id: row.get(0)?,
            title: row.get(1)?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

impl SetRepository for SqliteRepository {
    fn list_user_sets(&self) -> Result<Vec<UserSet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT set_id, title, created_at FROM vocabulary_sets ORDER BY rowid")?;
        let sets = stmt
            .query_map([], Self::row_to_set)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(sets)
    }

    fn get_user_set(&self, set_id: &str) -> Result<Option<UserSet>> {
        self.conn
            .query_row(
                "SELECT set_id, title, created_at FROM vocabulary_sets WHERE set_id = ?1",
                params![set_id],
                Self::row_to_set,
            )
            .optional()
            .map_err(Into::into)
    }

    fn is_user_created(&self, set_id: &str) -> Result<bool> {
        Ok(self.get_user_set(set_id)?.is_some())
    }

    fn add_set(&self, set: &UserSet) -> Result<()> {
        if self.is_user_created(&set.set_id)? {
            return Err(DbError::DuplicateSet(set.set_id.clone()));
        }
        self.conn.execute(
            "INSERT INTO vocabulary_sets (set_id, title, created_at) VALUES (?1, ?2, ?3)",
            params![set.set_id, set.title, set.created_at.to_rfc3339()],
        )?;
        Ok(())
    }

    fn rename_set(&self, set_id: &str, title: &str) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE vocabulary_sets SET title = ?1 WHERE set_id = ?2",
            params![title, set_id],
        )?;
        if updated == 0 {
            return Err(DbError::SetNotFound(set_id.to_string()));
        }
        Ok(())
    }

    fn delete_set(&self, set_id: &str) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let removed = tx.execute(
            "DELETE FROM vocabulary_sets WHERE set_id = ?1",
            params![set_id],
        )?;
        if removed == 0 {
            return Err(DbError::SetNotFound(set_id.to_string()));
        }
        let words = tx.execute("DELETE FROM words WHERE set_id = ?1", params![set_id])?;
        tx.commit()?;
        Ok(words)
    }
}

impl WordRepository for SqliteRepository {
    fn get_words(&self, set_id: &str) -> Result<Vec<WordEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, english, vietnamese, pronunciation, example, memory_tip
             FROM words WHERE set_id = ?1 ORDER BY position",
        )?;
        let words = stmt
            .query_map(params![set_id], Self::row_to_entry)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(words)
    }

    fn get_word(&self, id: WordId) -> Result<Option<WordEntry>> {
        self.conn
            .query_row(
                "SELECT id, english, vietnamese, pronunciation, example, memory_tip
                 FROM words WHERE id = ?1",
                params![id.to_string()],
                Self::row_to_entry,
            )
            .optional()
            .map_err(Into::into)
    }

    fn count_words(&self, set_id: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM words WHERE set_id = ?1",
            params![set_id],
            |row| row.get(0),
        )?;
        usize::try_from(count).map_err(|e| DbError::InvalidData(e.to_string()))
    }

    fn add_word(&self, set_id: &str, word: &Word) -> Result<WordEntry> {
        self.insert_word(set_id, word)
    }

    fn add_words(&self, set_id: &str, words: &[Word]) -> Result<Vec<WordEntry>> {
        let tx = self.conn.unchecked_transaction()?;
        let entries = words
            .iter()
            .map(|word| self.insert_word(set_id, word))
            .collect::<Result<Vec<_>>>()?;
        tx.commit()?;
        Ok(entries)
    }

    fn update_word(&self, id: WordId, word: &Word) -> Result<()> {
        let updated = self.conn.execute(
            "UPDATE words SET english = ?1, vietnamese = ?2, pronunciation = ?3, example = ?4, memory_tip = ?5
             WHERE id = ?6",
            params![
                word.english,
                word.vietnamese,
                word.pronunciation,
                word.example,
                word.memory_tip,
                id.to_string(),
            ],
        )?;
        if updated == 0 {
            return Err(DbError::WordNotFound(id));
        }
        Ok(())
    }

    fn delete_word(&self, id: WordId) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM words WHERE id = ?1", params![id.to_string()])?;
        if removed == 0 {
            return Err(DbError::WordNotFound(id));
        }
        Ok(())
    }
}
