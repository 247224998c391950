//! Typed events produced by the engine
//!
//! Every engine operation returns one value from a closed set and the
//! adapter reacts to it; nothing is reported through callbacks.

use crate::core::{Cursor, RowScore};
use std::fmt;

/// Why a row submission was refused
///
/// Both cases are recoverable: the row buffer and cursor are left untouched
/// so the player can correct the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowError {
    /// The completed row is not in the word list
    NotInWordList,
    /// Fewer than five letters have been typed
    RowIncomplete,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInWordList => write!(f, "Not in word list"),
            Self::RowIncomplete => write!(f, "Not enough letters"),
        }
    }
}

impl std::error::Error for RowError {}

/// How a finished game ended
///
/// Carried exactly once, on the event for the row that finished the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Guess matched the answer; `rows` is the 1-based count of guesses used
    Won { rows: usize },
    /// Sixth row submitted without a match
    Lost,
}

/// Result of a single engine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A letter was appended; `cursor` is the position after the append
    LetterAccepted { cursor: Cursor },
    /// A letter was removed; `cursor` is the position after the removal
    LetterRemoved { cursor: Cursor },
    /// A completed row was refused; nothing changed
    RowRejected(RowError),
    /// A row was validated and scored; `result` is set only when this row
    /// finished the game
    RowScored {
        row: usize,
        score: RowScore,
        result: Option<GameResult>,
    },
    /// Operation invoked in a state where it has no effect (e.g. typing
    /// after the game ended); state is unchanged
    Ignored,
}
