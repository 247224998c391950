//! Guess engine
//!
//! The deterministic state machine behind the game: cursor movement through
//! the 6×5 grid, duplicate-safe row scoring, and win/loss transitions. All
//! operations are synchronous and total; failures are typed events, never
//! panics, so the presentation layer decides how to react.

mod events;
mod game;
mod keyboard;

pub use events::{EngineEvent, GameResult, RowError};
pub use game::{Game, GameId, GameState};
pub use keyboard::KeyHints;

use crate::core::Word;
use rand::RngCore;

/// Word-list oracle the engine consults at row submission
///
/// Implemented by [`crate::wordlists::Lexicon`]; tests substitute small
/// fixed lists.
pub trait Dictionary {
    /// Is this a valid guessable word? Lookup is case-insensitive.
    fn contains(&self, word: &str) -> bool;

    /// Pick a target answer for a new game
    ///
    /// # Panics
    /// Implementations may panic when the answer pool is empty.
    fn pick_answer(&self, rng: &mut dyn RngCore) -> Word;
}
