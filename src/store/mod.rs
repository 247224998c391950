//! Persistence gateway
//!
//! The session saves after every state-changing engine operation, so a
//! half-played game and the stats ledger survive restarts. The storage
//! mechanism sits behind the [`SaveStore`] trait; the shipped backends are a
//! JSON file and an in-memory store for tests and ephemeral play.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::engine::{Game, GameState};
use crate::stats::StatsLedger;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Everything the game persists: the current round (if any) and the ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveState {
    pub game: Option<Game>,
    pub ledger: StatsLedger,
}

impl SaveState {
    /// Take the saved game if it is still resumable
    ///
    /// A game saved in a terminal state is discarded: "load returns the last
    /// unfinished game", and resuming a finished round could replay its
    /// finalize path.
    #[must_use]
    pub fn take_resumable_game(&mut self) -> Option<Game> {
        match self.game.take() {
            Some(game) if game.state() == GameState::InProgress => Some(game),
            _ => None,
        }
    }
}

/// Durable storage for the save state
pub trait SaveStore {
    /// Load the last saved state; missing storage loads as the default
    ///
    /// # Errors
    /// Returns an error when storage exists but cannot be read or parsed.
    fn load(&self) -> Result<SaveState>;

    /// Durably write the state
    ///
    /// # Errors
    /// Returns an error when the write fails.
    fn save(&self, state: &SaveState) -> Result<()>;
}
