//! Wordgrid
//!
//! A terminal word-guess game: six tries to find a five-letter word, with
//! duplicate-safe letter scoring, persistent statistics, and resumable games.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordgrid::core::{RowScore, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! // Score the guess against the answer
//! let score = RowScore::score(&guess, &answer);
//! println!("{}", score.to_emoji());
//! ```

// Core domain types
pub mod core;

// Guess engine state machine
pub mod engine;

// Statistics ledger
pub mod stats;

// Persistence gateway
pub mod store;

// Session wiring between UI and engine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
