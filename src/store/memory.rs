//! In-memory storage backend
//!
//! Used by tests and by ephemeral play modes that should not touch disk.

use super::{SaveState, SaveStore};
use anyhow::Result;
use std::cell::RefCell;

/// Save state held in process memory
///
/// Single-threaded by design, like the rest of the game; the session and
/// its store are owned by one presentation controller.
#[derive(Default)]
pub struct MemoryStore {
    state: RefCell<SaveState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn load(&self) -> Result<SaveState> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &SaveState) -> Result<()> {
        *self.state.borrow_mut() = state.clone();
        Ok(())
    }
}
