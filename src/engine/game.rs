//! Game state and the guess-submission state machine
//!
//! One `Game` is one round: a fixed answer, up to six scored guesses, a
//! cursor into the grid, and the in-progress row buffer. All mutation goes
//! through `submit_letter` / `backspace` / `submit_row`; each returns a
//! typed [`EngineEvent`] and never panics or corrupts state.

use super::events::{EngineEvent, GameResult, RowError};
use super::keyboard::KeyHints;
use super::Dictionary;
use crate::core::{Cursor, RowScore, Word};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for one round, used to de-duplicate stat updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(Uuid);

impl GameId {
    /// Generate a fresh random id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a round; transitions only move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// One round of the guess game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    answer: Word,
    guesses: Vec<Word>,
    scores: Vec<RowScore>,
    cursor: Cursor,
    state: GameState,
    row_buffer: String,
    hints: KeyHints,
}

impl Game {
    /// Start a fresh round with the given answer
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            id: GameId::new(),
            answer,
            guesses: Vec::new(),
            scores: Vec::new(),
            cursor: Cursor::new(),
            state: GameState::InProgress,
            row_buffer: String::new(),
            hints: KeyHints::default(),
        }
    }

    /// Start a fresh round with an answer drawn from the dictionary
    #[must_use]
    pub fn with_random_answer(dict: &impl Dictionary, rng: &mut dyn rand::RngCore) -> Self {
        Self::new(dict.pick_answer(rng))
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// The target answer
    ///
    /// Adapters only reveal it once the round is over, but the engine does
    /// not police that.
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Scores for the submitted guesses, parallel to `guesses()`
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[RowScore] {
        &self.scores
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The letters typed into the current row so far
    #[inline]
    #[must_use]
    pub fn row_buffer(&self) -> &str {
        &self.row_buffer
    }

    /// Keyboard highlighting hints accumulated over this round
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &KeyHints {
        &self.hints
    }

    /// True once the round reached `Won` or `Lost`
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Append one letter to the current row
    ///
    /// No-op (`Ignored`) when the round is over, the row is full, or `ch`
    /// is not a letter. Validation of the whole word happens at submit.
    pub fn submit_letter(&mut self, ch: char) -> EngineEvent {
        if self.state != GameState::InProgress {
            return EngineEvent::Ignored;
        }
        if !ch.is_ascii_alphabetic() {
            return EngineEvent::Ignored;
        }
        if !self.cursor.advance() {
            // Row already holds five letters
            return EngineEvent::Ignored;
        }

        self.row_buffer.push(ch.to_ascii_lowercase());
        EngineEvent::LetterAccepted {
            cursor: self.cursor,
        }
    }

    /// Remove the last letter of the current row
    ///
    /// No-op at the start of a row; submitted rows are immutable, so the
    /// cursor never moves back across a row boundary.
    pub fn backspace(&mut self) -> EngineEvent {
        if self.state != GameState::InProgress {
            return EngineEvent::Ignored;
        }
        if !self.cursor.retreat() {
            return EngineEvent::Ignored;
        }

        self.row_buffer.pop();
        EngineEvent::LetterRemoved {
            cursor: self.cursor,
        }
    }

    /// Validate, score, and commit the current row
    ///
    /// A row that is incomplete or not in the word list is rejected with the
    /// buffer and cursor untouched. An accepted row is scored with the
    /// two-pass rule, appended to the guess history, folded into the
    /// keyboard hints, and checked for the terminal transitions: `Won` when
    /// the guess equals the answer, `Lost` when this was the sixth row.
    /// The returned event carries the game result exactly once, on the
    /// finishing row.
    pub fn submit_row(&mut self, dict: &impl Dictionary) -> EngineEvent {
        if self.state != GameState::InProgress {
            return EngineEvent::Ignored;
        }
        if !self.cursor.row_full() {
            return EngineEvent::RowRejected(RowError::RowIncomplete);
        }

        // Buffer is lowercase ASCII of length 5 by construction
        let Ok(guess) = Word::new(self.row_buffer.as_str()) else {
            return EngineEvent::RowRejected(RowError::NotInWordList);
        };
        if !dict.contains(guess.text()) {
            return EngineEvent::RowRejected(RowError::NotInWordList);
        }

        let score = RowScore::score(&guess, &self.answer);
        let row = self.cursor.row();

        self.hints.merge(&guess, &score);
        self.guesses.push(guess);
        self.scores.push(score);
        self.row_buffer.clear();

        let result = if score.is_winning() {
            self.state = GameState::Won;
            Some(GameResult::Won { rows: row + 1 })
        } else if self.cursor.last_row() {
            self.state = GameState::Lost;
            Some(GameResult::Lost)
        } else {
            self.cursor.next_row();
            None
        };

        EngineEvent::RowScored { row, score, result }
    }
}
