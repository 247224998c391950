//! Keyboard highlighting hints
//!
//! Tracks the best outcome ever seen for each letter across a game so the
//! on-screen keyboard can be colored. `Correct` outranks `Present` outranks
//! `Absent`; once a key is marked `Correct` it is never downgraded.

use crate::core::{LetterOutcome, RowScore, Word};
use serde::{Deserialize, Serialize};

const ALPHABET: usize = 26;

/// Best-known outcome per letter of the alphabet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyHints {
    best: [Option<LetterOutcome>; ALPHABET],
}

impl KeyHints {
    /// Fold one scored row into the hints
    ///
    /// Each letter keeps the maximum of its previous hint and the new
    /// outcome, so a key only ever moves up the ranking.
    pub fn merge(&mut self, guess: &Word, score: &RowScore) {
        for (i, &ch) in guess.chars().iter().enumerate() {
            let slot = &mut self.best[usize::from(ch - b'a')];
            let outcome = score.outcome_at(i);
            *slot = Some(slot.map_or(outcome, |prev| prev.max(outcome)));
        }
    }

    /// Best outcome seen for a letter, if it has been played
    ///
    /// Returns `None` for unplayed letters and for anything outside a-z.
    #[must_use]
    pub fn hint(&self, ch: char) -> Option<LetterOutcome> {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() {
            self.best[(ch as usize) - ('a' as usize)]
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterOutcome::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn hints_start_empty() {
        let hints = KeyHints::default();
        for ch in 'a'..='z' {
            assert_eq!(hints.hint(ch), None);
        }
    }

    #[test]
    fn hints_record_outcomes() {
        let mut hints = KeyHints::default();
        let guess = word("crane");
        let score = RowScore::score(&guess, &word("slate"));
        hints.merge(&guess, &score);

        assert_eq!(hints.hint('c'), Some(Absent));
        assert_eq!(hints.hint('a'), Some(Correct));
        assert_eq!(hints.hint('e'), Some(Correct));
        assert_eq!(hints.hint('z'), None);
    }

    #[test]
    fn hints_upgrade_but_never_downgrade() {
        let mut hints = KeyHints::default();
        let answer = word("floor");

        // ROBOT vs FLOOR: O present at index 1, correct at index 3
        let robot = word("robot");
        hints.merge(&robot, &RowScore::score(&robot, &answer));
        assert_eq!(hints.hint('o'), Some(Correct));
        assert_eq!(hints.hint('r'), Some(Present));

        // A later guess where O is merely present must not downgrade the key
        let moose = word("moose");
        hints.merge(&moose, &RowScore::score(&moose, &answer));
        assert_eq!(hints.hint('o'), Some(Correct));
    }

    #[test]
    fn hints_case_insensitive_lookup() {
        let mut hints = KeyHints::default();
        let guess = word("board");
        hints.merge(&guess, &RowScore::score(&guess, &word("board")));
        assert_eq!(hints.hint('B'), Some(Correct));
    }

    #[test]
    fn hints_ignore_non_letters() {
        let hints = KeyHints::default();
        assert_eq!(hints.hint('1'), None);
        assert_eq!(hints.hint(' '), None);
    }
}
