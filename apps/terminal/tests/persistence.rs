//! User data survives reopening the on-disk store.

mod common;

use std::path::PathBuf;

use vocab_core::{SetKind, SetOrigin, Word};
use vocab_terminal::{AiConfig, AppConfig, AppState};

fn temp_config() -> AppConfig {
    let data_dir: PathBuf = std::env::temp_dir().join(format!("vocab-test-{}", uuid::Uuid::new_v4()));
    AppConfig {
        data_dir,
        ai: AiConfig::default(),
    }
}

#[test]
fn test_sets_and_words_persist() {
    let config = temp_config();

    let set_id = {
        let state = AppState::open(&config).unwrap();
        let set = state
            .vocabulary
            .create_set("Kitchen", SetKind::Manual)
            .unwrap();
        state
            .vocabulary
            .add_word(&set.set_id, &Word::new("spoon", "cái thìa"))
            .unwrap();
        state
            .vocabulary
            .add_word("house", &Word::new("attic", "gác mái"))
            .unwrap();
        set.set_id
    };

    assert!(config.db_path().exists());

    let state = AppState::open(&config).unwrap();
    assert_eq!(state.vocabulary.origin(&set_id).unwrap(), Some(SetOrigin::User));
    assert_eq!(state.vocabulary.title(&set_id).unwrap().as_deref(), Some("Kitchen"));
    assert_eq!(
        state.vocabulary.get_words(&set_id).unwrap(),
        vec![Word::new("spoon", "cái thìa")]
    );

    let house = state.vocabulary.get_words("house").unwrap();
    assert_eq!(house.last().unwrap().english, "attic");

    drop(state);
    std::fs::remove_dir_all(&config.data_dir).ok();
}

#[test]
fn test_generated_set_round_trips() {
    let config = temp_config();
    let words = common::fixtures::sample_words(6);

    let set_id = {
        let state = AppState::open(&config).unwrap();
        state
            .vocabulary
            .save_generated("AI: colors", &words)
            .unwrap()
            .set_id
    };

    let state = AppState::open(&config).unwrap();
    assert!(set_id.starts_with("ai_"));
    assert_eq!(state.vocabulary.get_words(&set_id).unwrap(), words);
    assert_eq!(state.vocabulary.ensure_playable(&set_id).unwrap().len(), 6);

    drop(state);
    std::fs::remove_dir_all(&config.data_dir).ok();
}
