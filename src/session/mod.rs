//! Game session: the seam between UI adapters and the engine
//!
//! A `GameSession` owns the engine state, the stats ledger, the lexicon, and
//! a save store; the UI owns the session. There is no ambient shared state
//! or singleton: one explicitly constructed value is passed to the front
//! end.
//!
//! Policy: the session persists after every state-changing engine operation
//! and updates the ledger exactly once per finished game id.

mod notice;

pub use notice::{NOTICE_TTL, Notice};

use crate::core::Word;
use crate::engine::{EngineEvent, Game};
use crate::stats::StatsLedger;
use crate::store::{SaveState, SaveStore};
use crate::wordlists::Lexicon;
use anyhow::Result;

/// Owns one game plus the ledger and drives both from key presses
pub struct GameSession<S: SaveStore> {
    game: Game,
    ledger: StatsLedger,
    lexicon: Lexicon,
    store: S,
}

impl<S: SaveStore> GameSession<S> {
    /// Load the saved state and resume the unfinished game, or start fresh
    ///
    /// # Errors
    /// Returns an error when the store cannot be read or written.
    pub fn new(lexicon: Lexicon, store: S) -> Result<Self> {
        let mut saved = store.load()?;
        let game = saved
            .take_resumable_game()
            .unwrap_or_else(|| Game::with_random_answer(&lexicon, &mut rand::rng()));

        let session = Self {
            game,
            ledger: saved.ledger,
            lexicon,
            store,
        };
        session.persist()?;
        Ok(session)
    }

    /// Start a fresh session with a forced answer, ignoring any saved game
    ///
    /// Development aid behind the `--answer` flag; the ledger still loads
    /// and persists normally.
    ///
    /// # Errors
    /// Returns an error when the store cannot be read or written.
    pub fn with_answer(lexicon: Lexicon, store: S, answer: Word) -> Result<Self> {
        let saved = store.load()?;
        let session = Self {
            game: Game::new(answer),
            ledger: saved.ledger,
            lexicon,
            store,
        };
        session.persist()?;
        Ok(session)
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    #[must_use]
    pub const fn ledger(&self) -> &StatsLedger {
        &self.ledger
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Type one letter into the current row
    ///
    /// # Errors
    /// Returns an error only when persisting the new state fails.
    pub fn press_letter(&mut self, ch: char) -> Result<EngineEvent> {
        let event = self.game.submit_letter(ch);
        if event != EngineEvent::Ignored {
            self.persist()?;
        }
        Ok(event)
    }

    /// Remove the last letter of the current row
    ///
    /// # Errors
    /// Returns an error only when persisting the new state fails.
    pub fn press_backspace(&mut self) -> Result<EngineEvent> {
        let event = self.game.backspace();
        if event != EngineEvent::Ignored {
            self.persist()?;
        }
        Ok(event)
    }

    /// Submit the current row
    ///
    /// When the row finishes the game, the ledger is updated here, once;
    /// the ledger's own id guard makes a replayed finalize harmless.
    ///
    /// # Errors
    /// Returns an error only when persisting the new state fails.
    pub fn press_enter(&mut self) -> Result<EngineEvent> {
        let event = self.game.submit_row(&self.lexicon);

        if let EngineEvent::RowScored { result, .. } = event {
            if let Some(game_result) = result {
                self.ledger.record_result(self.game.id(), game_result);
            }
            self.persist()?;
        }
        Ok(event)
    }

    /// Discard the current game and start a new round
    ///
    /// Reset is atomic and total: fresh id, fresh answer, cleared grid. The
    /// ledger is untouched.
    ///
    /// # Errors
    /// Returns an error only when persisting the new state fails.
    pub fn new_game(&mut self) -> Result<()> {
        self.game = Game::with_random_answer(&self.lexicon, &mut rand::rng());
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        // A finished game is persisted too: its ledger entry is already
        // recorded and the store discards it as non-resumable on load.
        let state = SaveState {
            game: Some(self.game.clone()),
            ledger: self.ledger.clone(),
        };
        self.store.save(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GameState, RowError};
    use crate::store::MemoryStore;

    fn lexicon(words: &[&str]) -> Lexicon {
        let words: Vec<Word> = words.iter().map(|w| Word::new(*w).unwrap()).collect();
        Lexicon::new(&words, words.clone())
    }

    fn session_with_answer(answer: &str, words: &[&str]) -> GameSession<MemoryStore> {
        GameSession::with_answer(
            lexicon(words),
            MemoryStore::new(),
            Word::new(answer).unwrap(),
        )
        .unwrap()
    }

    fn type_word(session: &mut GameSession<MemoryStore>, word: &str) {
        for ch in word.chars() {
            session.press_letter(ch).unwrap();
        }
    }

    #[test]
    fn winning_round_updates_ledger_once() {
        let mut session = session_with_answer("board", &["board", "slate"]);
        type_word(&mut session, "board");
        let event = session.press_enter().unwrap();

        assert!(matches!(
            event,
            EngineEvent::RowScored {
                result: Some(_),
                ..
            }
        ));
        assert_eq!(session.ledger().games_played(), 1);
        assert_eq!(session.ledger().games_won(), 1);
        assert_eq!(session.ledger().current_streak(), 1);

        // Submitting again is a no-op and records nothing
        let replay = session.press_enter().unwrap();
        assert_eq!(replay, EngineEvent::Ignored);
        assert_eq!(session.ledger().games_played(), 1);
    }

    #[test]
    fn rejected_row_records_nothing() {
        let mut session = session_with_answer("board", &["board"]);
        type_word(&mut session, "slate");
        let event = session.press_enter().unwrap();

        assert_eq!(event, EngineEvent::RowRejected(RowError::NotInWordList));
        assert_eq!(session.ledger().games_played(), 0);
        assert_eq!(session.game().row_buffer(), "slate");
    }

    #[test]
    fn state_persists_after_each_mutation() {
        let store = MemoryStore::new();
        let mut session = GameSession::with_answer(
            lexicon(&["board"]),
            store,
            Word::new("board").unwrap(),
        )
        .unwrap();

        session.press_letter('b').unwrap();
        // The saved copy reflects the letter immediately
        let saved = session.store.load().unwrap();
        assert_eq!(saved.game.unwrap().row_buffer(), "b");

        session.press_backspace().unwrap();
        let saved = session.store.load().unwrap();
        assert_eq!(saved.game.unwrap().row_buffer(), "");
    }

    #[test]
    fn unfinished_game_resumes_across_sessions() {
        let store = MemoryStore::new();
        let id;
        {
            let mut session = GameSession::with_answer(
                lexicon(&["board", "slate"]),
                store,
                Word::new("board").unwrap(),
            )
            .unwrap();
            id = session.game().id();
            type_word(&mut session, "slate");
            session.press_enter().unwrap();

            // Rebuild from the same backing state
            let store_again = MemoryStore::new();
            store_again.save(&session.store.load().unwrap()).unwrap();
            let resumed = GameSession::new(lexicon(&["board", "slate"]), store_again).unwrap();
            assert_eq!(resumed.game().id(), id);
            assert_eq!(resumed.game().guesses().len(), 1);
        }
    }

    #[test]
    fn finished_game_not_resumed_and_ledger_guard_holds() {
        let store = MemoryStore::new();
        let mut session = GameSession::with_answer(
            lexicon(&["board"]),
            store,
            Word::new("board").unwrap(),
        )
        .unwrap();
        let finished_id = session.game().id();
        type_word(&mut session, "board");
        session.press_enter().unwrap();

        // New session over the same storage: fresh game, ledger intact
        let store_again = MemoryStore::new();
        store_again.save(&session.store.load().unwrap()).unwrap();
        let resumed = GameSession::new(lexicon(&["board"]), store_again).unwrap();
        assert_ne!(resumed.game().id(), finished_id);
        assert_eq!(resumed.ledger().games_won(), 1);
    }

    #[test]
    fn new_game_replaces_round_and_keeps_ledger() {
        let mut session = session_with_answer("board", &["board"]);
        type_word(&mut session, "board");
        session.press_enter().unwrap();
        let old_id = session.game().id();

        session.new_game().unwrap();
        assert_ne!(session.game().id(), old_id);
        assert_eq!(session.game().state(), GameState::InProgress);
        assert!(session.game().guesses().is_empty());
        assert_eq!(session.ledger().games_won(), 1);
    }

    #[test]
    fn loss_then_win_streak_sequence() {
        let words = ["slate", "crane", "grate", "irate", "plate", "skate", "board"];
        let mut session = session_with_answer("board", &words);

        for guess in &words[..6] {
            type_word(&mut session, guess);
            session.press_enter().unwrap();
        }
        assert_eq!(session.game().state(), GameState::Lost);
        assert_eq!(session.ledger().games_lost(), 1);
        assert_eq!(session.ledger().current_streak(), 0);

        session.new_game().unwrap();
        // The new answer comes from the pool; type it via the engine's view
        let answer = session.game().answer().text().to_string();
        type_word(&mut session, &answer);
        session.press_enter().unwrap();
        assert_eq!(session.ledger().games_won(), 1);
        assert_eq!(session.ledger().current_streak(), 1);
    }
}
