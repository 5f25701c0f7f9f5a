//! Word lists used across tests.

use vocab_core::Word;

/// `n` distinct words with predictable text.
pub fn sample_words(n: usize) -> Vec<Word> {
    (0..n)
        .map(|i| {
            Word::new(format!("word{}", i + 1), format!("từ {}", i + 1))
                .with_example(format!("Example {}.", i + 1))
        })
        .collect()
}

/// The five pairs used by most matching tests.
pub fn animals() -> Vec<Word> {
    vec![
        Word::new("cat", "mèo"),
        Word::new("dog", "chó"),
        Word::new("bird", "chim"),
        Word::new("fish", "cá"),
        Word::new("horse", "ngựa"),
    ]
}
