//! Command handlers behind the `vocab` subcommands.
//!
//! Handlers write to any `std::io::Write` and interactive ones read lines from
//! any `AsyncBufRead`, so they run the same against a terminal or a test buffer.

pub mod ai;
pub mod matching;
pub mod sets;
pub mod study;
pub mod words;

pub use words::WordFields;
