//! Validated five-letter word type
//!
//! Every word entering the engine passes through `Word::new`, which settles
//! the case-sensitivity question once: all words are lowercase ASCII inside
//! the engine boundary.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of letters in a word (and columns in the grid)
pub const WORD_LEN: usize = 5;

/// A validated 5-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordgrid::core::Word;
    ///
    /// let word = Word::new("Board").unwrap();
    /// assert_eq!(word.text(), "board");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the count of each letter in the word
    ///
    /// This is the "remaining pool" map used by the two-pass row scoring
    /// to avoid over-crediting duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("board").unwrap();
        assert_eq!(word.text(), "board");
        assert_eq!(word.chars(), b"board");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BOARD").unwrap();
        assert_eq!(word.text(), "board");

        let word2 = Word::new("BoArD").unwrap();
        assert_eq!(word2.text(), "board");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("boar3").is_err()); // Number
        assert!(Word::new("boar ").is_err()); // Space
        assert!(Word::new("boar!").is_err()); // Punctuation
    }

    #[test]
    fn word_char_counts_duplicates() {
        let word = Word::new("sheep").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'h'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'p'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_unique() {
        let word = Word::new("board").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("board").unwrap();
        let word2 = Word::new("BOARD").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_serde_round_trip() {
        let word = Word::new("board").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"board\"");

        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
    }

    #[test]
    fn word_serde_rejects_invalid() {
        assert!(serde_json::from_str::<Word>("\"toolong\"").is_err());
        assert!(serde_json::from_str::<Word>("\"ab1de\"").is_err());
    }
}
