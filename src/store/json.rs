//! JSON file storage backend

use super::{SaveState, SaveStore};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Save state as a JSON blob at a fixed path
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous save intact.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<SaveState> {
        if !self.path.exists() {
            return Ok(SaveState::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read save file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("save file {} is corrupt", self.path.display()))
    }

    fn save(&self, state: &SaveState) -> Result<()> {
        let json = serde_json::to_string_pretty(state).context("failed to serialize save state")?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("failed to write save file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace save file {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::Game;
    use std::env;

    fn temp_store(name: &str) -> JsonFileStore {
        let mut path = env::temp_dir();
        path.push(format!("wordgrid-test-{name}-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);
        JsonFileStore::new(path)
    }

    #[test]
    fn missing_file_loads_default() {
        let store = temp_store("missing");
        let state = store.load().unwrap();
        assert!(state.game.is_none());
        assert_eq!(state.ledger.games_played(), 0);
    }

    #[test]
    fn save_then_load_round_trip() {
        let store = temp_store("roundtrip");
        let state = SaveState {
            game: Some(Game::new(Word::new("board").unwrap())),
            ledger: crate::stats::StatsLedger::default(),
        };

        store.save(&state).unwrap();
        let loaded = store.load().unwrap();
        let game = loaded.game.expect("game should persist");
        assert_eq!(game.answer().text(), "board");

        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "not json").unwrap();
        assert!(store.load().is_err());
        let _ = fs::remove_file(store.path());
    }
}
