//! Aggregate statistics across completed games
//!
//! The ledger is updated exactly once per finished game. Callers may replay
//! a finalize (e.g. after a crash-restore) without harm: recording is
//! idempotent per game id.

use crate::core::MAX_ROWS;
use crate::engine::{GameId, GameResult};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Persisted win/loss counters and streaks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsLedger {
    games_played: u32,
    games_won: u32,
    games_lost: u32,
    current_streak: u32,
    longest_streak: u32,
    /// Wins by number of guesses used; index 0 = won on the first row
    guess_distribution: [u32; MAX_ROWS],
    /// Ids of games already recorded, the duplicate guard
    recorded: FxHashSet<GameId>,
}

impl StatsLedger {
    /// Record the result of a finished game
    ///
    /// Returns `true` if the ledger changed, `false` for a duplicate id
    /// (the ledger is left untouched). The streak record is only extended
    /// by exactly-equal ties: `longest_streak` grows when `current_streak`
    /// had already caught up to it before this win.
    pub fn record_result(&mut self, id: GameId, result: GameResult) -> bool {
        if !self.recorded.insert(id) {
            return false;
        }

        self.games_played += 1;
        match result {
            GameResult::Won { rows } => {
                self.games_won += 1;
                if self.current_streak == self.longest_streak {
                    self.longest_streak += 1;
                }
                self.current_streak += 1;

                if let Some(slot) = rows
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            GameResult::Lost => {
                self.games_lost += 1;
                self.current_streak = 0;
            }
        }

        debug_assert!(self.current_streak <= self.longest_streak);
        true
    }

    #[inline]
    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[inline]
    #[must_use]
    pub const fn games_won(&self) -> u32 {
        self.games_won
    }

    #[inline]
    #[must_use]
    pub const fn games_lost(&self) -> u32 {
        self.games_lost
    }

    #[inline]
    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[inline]
    #[must_use]
    pub const fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    /// Wins by guesses used; index 0 = won on the first row
    #[inline]
    #[must_use]
    pub const fn guess_distribution(&self) -> &[u32; MAX_ROWS] {
        &self.guess_distribution
    }

    /// Fraction of played games that were won, 0.0 when none played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}
