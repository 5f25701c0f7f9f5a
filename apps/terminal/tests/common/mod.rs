//! Shared setup for the terminal integration tests.
//!
//! Every context runs against an in-memory SQLite store and an AI client with
//! no API key, so nothing touches disk or the network.

pub mod fixtures;

use std::path::PathBuf;

use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use vocab_core::MatchCard;
use vocab_terminal::{AiConfig, AppConfig, AppState};

pub struct TestContext {
    pub state: AppState,
    pub out: Vec<u8>,
}

impl TestContext {
    pub fn new() -> Self {
        let config = AppConfig {
            data_dir: PathBuf::from("unused"),
            ai: AiConfig {
                api_key: None,
                api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
                model: "test-model".to_string(),
            },
        };
        Self {
            state: AppState::in_memory(&config).expect("in-memory state"),
            out: Vec::new(),
        }
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

/// Scripted user input, one command per line.
pub fn script(input: &'static str) -> Lines<BufReader<&'static [u8]>> {
    BufReader::new(input.as_bytes()).lines()
}

/// Positions of both cards of each pair, in pair order.
pub fn pair_positions(cards: &[MatchCard]) -> Vec<[usize; 2]> {
    let pair_count = cards.len() / 2;
    (0..pair_count)
        .map(|pair_id| {
            let mut positions = cards
                .iter()
                .enumerate()
                .filter(|(_, c)| c.pair_id == pair_id)
                .map(|(i, _)| i);
            [positions.next().unwrap(), positions.next().unwrap()]
        })
        .collect()
}
