//! Word lists and the dictionary oracle
//!
//! The embedded lists are compiled into the binary at build time. `Lexicon`
//! wraps them behind the engine's [`Dictionary`] seam: membership checks for
//! guesses and uniform answer selection for new games.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::engine::Dictionary;
use rand::{Rng, RngCore};
use rustc_hash::FxHashSet;

/// The game's word lists: a guessable set and an answer pool
///
/// The answer pool is a subset of the guessable set; any answer is also a
/// valid guess, but obscure guessable words never become answers.
pub struct Lexicon {
    allowed: FxHashSet<String>,
    answers: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from explicit lists
    ///
    /// Guesses against `answers` words always succeed: the answer pool is
    /// folded into the allowed set so a custom list cannot produce a game
    /// whose own answer is rejected.
    #[must_use]
    pub fn new(allowed: &[Word], answers: Vec<Word>) -> Self {
        let mut allowed: FxHashSet<String> =
            allowed.iter().map(|w| w.text().to_string()).collect();
        for answer in &answers {
            allowed.insert(answer.text().to_string());
        }
        Self { allowed, answers }
    }

    /// The default lexicon from the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            &loader::words_from_slice(ALLOWED),
            loader::words_from_slice(ANSWERS),
        )
    }

    /// Number of guessable words
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Number of possible answers
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}

impl Dictionary for Lexicon {
    fn contains(&self, word: &str) -> bool {
        self.allowed.contains(&word.to_lowercase())
    }

    /// # Panics
    /// Panics when the lexicon was built with an empty answer list.
    fn pick_answer(&self, rng: &mut dyn RngCore) -> Word {
        assert!(!self.answers.is_empty(), "answer pool is empty");
        let index = rng.random_range(0..self.answers.len());
        self.answers[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for &answer in ANSWERS {
            assert!(
                allowed_set.contains(&answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn lexicon_membership_is_case_insensitive() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.contains("board"));
        assert!(lexicon.contains("BOARD"));
        assert!(!lexicon.contains("zzzzz"));
    }

    #[test]
    fn lexicon_accepts_guess_only_words() {
        let lexicon = Lexicon::embedded();
        // In the allowed list but not the answer pool
        assert!(lexicon.contains("peels"));
        assert!(lexicon.contains("lolly"));
    }

    #[test]
    fn pick_answer_draws_from_answer_pool() {
        let lexicon = Lexicon::embedded();
        let mut rng = rand::rng();

        for _ in 0..20 {
            let answer = lexicon.pick_answer(&mut rng);
            assert!(
                ANSWERS.contains(&answer.text()),
                "picked '{answer}' outside the answer pool"
            );
        }
    }

    #[test]
    #[should_panic(expected = "answer pool is empty")]
    fn pick_answer_panics_on_empty_pool() {
        let lexicon = Lexicon::new(&[], Vec::new());
        let _ = lexicon.pick_answer(&mut rand::rng());
    }

    #[test]
    fn custom_lexicon_always_allows_its_answers() {
        let answers = vec![Word::new("board").unwrap()];
        let lexicon = Lexicon::new(&[], answers);
        assert!(lexicon.contains("board"));
        assert_eq!(lexicon.answer_count(), 1);
        // The answer was folded into the allowed set
        assert_eq!(lexicon.allowed_count(), 1);
    }
}
