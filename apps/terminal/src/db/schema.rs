//! SQLite schema definitions.

/// Current schema version for migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema for the local vocabulary store.
pub const SCHEMA: &str = r#"
-- User-created vocabulary sets (the registry of editable set ids)
CREATE TABLE IF NOT EXISTS vocabulary_sets (
    set_id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- User-added words, for user sets and shipped sets alike
CREATE TABLE IF NOT EXISTS words (
    id TEXT PRIMARY KEY,
    set_id TEXT NOT NULL,
    position INTEGER NOT NULL,
    english TEXT NOT NULL,
    vietnamese TEXT NOT NULL,
    pronunciation TEXT NOT NULL DEFAULT '',
    example TEXT NOT NULL DEFAULT '',
    memory_tip TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL
);

-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_words_set ON words(set_id, position);
"#;

/// Record the schema version if not yet recorded.
pub const INIT_SCHEMA_VERSION: &str = r#"
INSERT OR IGNORE INTO schema_version (version) VALUES (1);
"#;
