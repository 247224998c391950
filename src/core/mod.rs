//! Core domain types for the word-guess game
//!
//! This module contains the fundamental domain types with no game-state
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod cursor;
mod outcome;
mod word;

pub use cursor::{Cursor, MAX_ROWS};
pub use outcome::{LetterOutcome, RowScore};
pub use word::{WORD_LEN, Word, WordError};
