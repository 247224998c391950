//! Per-letter outcomes and row scoring
//!
//! A `RowScore` holds the feedback for one submitted guess: one
//! `LetterOutcome` per position. Scoring uses a two-pass algorithm so that
//! duplicate letters are never credited more times than they remain
//! unaccounted-for in the answer:
//!
//! 1. First pass marks `Correct` wherever `guess[i] == answer[i]` and
//!    removes that letter from the answer's remaining pool.
//! 2. Second pass marks `Present` only while the letter's remaining count
//!    is positive (decrementing it), otherwise `Absent`.

use super::word::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};

/// Classification of a single guessed letter
///
/// Variant order matters: `Absent < Present < Correct`, which is the ranking
/// used by the keyboard hints (a key is never downgraded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterOutcome {
    /// Letter does not appear (or all its copies are already accounted for)
    Absent,
    /// Letter appears in the answer at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

/// Feedback for one submitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowScore([LetterOutcome; WORD_LEN]);

impl RowScore {
    /// Score `guess` against `answer` using the two-pass duplicate-safe rule
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::{LetterOutcome, RowScore, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let answer = Word::new("floor").unwrap();
    /// let score = RowScore::score(&guess, &answer);
    ///
    /// // R(present) O(present) B(absent) O(correct) T(absent)
    /// assert_eq!(score.outcome_at(3), LetterOutcome::Correct);
    /// assert_eq!(score.outcome_at(1), LetterOutcome::Present);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterOutcome::Absent; WORD_LEN];
        let mut remaining = answer.char_counts();

        // First pass: exact position matches, removed from the pool
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                result[i] = LetterOutcome::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong-position matches, limited by the remaining pool
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == LetterOutcome::Absent {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = LetterOutcome::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Outcomes in position order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LEN] {
        &self.0
    }

    /// Outcome at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[inline]
    #[must_use]
    pub const fn outcome_at(&self, position: usize) -> LetterOutcome {
        self.0[position]
    }

    /// True when every position is `Correct` (the guess is the answer)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Count of `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&o| o == LetterOutcome::Correct)
            .count()
    }

    /// Count of `Present` positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&o| o == LetterOutcome::Present)
            .count()
    }

    /// Convert to an emoji share string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|o| match o {
                LetterOutcome::Correct => '🟩',
                LetterOutcome::Present => '🟨',
                LetterOutcome::Absent => '⬜',
            })
            .collect()
    }
}
