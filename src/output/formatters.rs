//! Formatting utilities for terminal output

use crate::core::{LetterOutcome, RowScore, Word};
use colored::Colorize;

/// Format a scored guess as a colored uppercase row
///
/// Correct letters are green, present letters yellow, absent letters dimmed.
#[must_use]
pub fn colored_guess_row(word: &Word, score: &RowScore) -> String {
    word.text()
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let letter = ch.to_ascii_uppercase().to_string();
            let styled = match score.outcome_at(i) {
                LetterOutcome::Correct => letter.bright_green().bold(),
                LetterOutcome::Present => letter.bright_yellow().bold(),
                LetterOutcome::Absent => letter.bright_black(),
            };
            format!("{styled} ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format one row of the guess distribution as a labeled bar
///
/// `rows` is the 1-based guess count, `count` its wins, `max` the largest
/// bucket (for scaling).
#[must_use]
pub fn distribution_bar(rows: usize, count: u32, max: u32, width: usize) -> String {
    let bar = if max == 0 {
        create_progress_bar(0.0, 1.0, width)
    } else {
        create_progress_bar(f64::from(count), f64::from(max), width)
    };
    format!("{rows}: {bar} {count}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn distribution_bar_scales_to_max() {
        let line = distribution_bar(3, 5, 5, 10);
        assert!(line.starts_with("3: "));
        assert!(line.ends_with(" 5"));
        assert!(line.contains("██████████"));
    }

    #[test]
    fn distribution_bar_handles_empty_ledger() {
        let line = distribution_bar(1, 0, 0, 10);
        assert!(line.contains("░░░░░░░░░░"));
    }

    #[test]
    fn colored_row_contains_all_letters() {
        colored::control::set_override(false);
        let word = Word::new("board").unwrap();
        let score = RowScore::score(&word, &word);
        let row = colored_guess_row(&word, &score);
        assert_eq!(row, "B O A R D ");
        colored::control::unset_override();
    }
}
