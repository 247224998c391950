//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a five-letter word per turn and
//! read the colored feedback.

use crate::core::MAX_ROWS;
use crate::engine::{EngineEvent, GameResult, GameState, RowError};
use crate::output::colored_guess_row;
use crate::session::GameSession;
use crate::store::SaveStore;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails or the save store cannot be
/// written.
pub fn run_simple<S: SaveStore>(session: &mut GameSession<S>) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 WORDGRID - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_ROWS} tries.");
    println!("  - {} = correct position", "green".bright_green().bold());
    println!("  - {} = wrong position", "yellow".bright_yellow().bold());
    println!("  - {} = not in the word\n", "gray".bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game, 'stats' for statistics\n");

    if !session.game().guesses().is_empty() {
        println!("Resuming your unfinished game:\n");
        print_grid(session);
    }

    loop {
        if session.game().is_over() {
            match prompt("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session.new_game()?;
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let turn = session.game().guesses().len() + 1;
        let input = prompt(&format!("Guess {turn}/{MAX_ROWS}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.new_game()?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "stats" => {
                super::stats::print_stats(session.ledger());
                continue;
            }
            word => {
                if !word.chars().all(|c| c.is_ascii_alphabetic()) || word.len() != 5 {
                    println!("{}\n", "❌ Enter exactly five letters.".red());
                    continue;
                }
                play_word(session, word)?;
            }
        }
    }
}

/// Type a full word into the engine and submit it
///
/// A resumed game may carry a partially typed row; line input always
/// replaces it, so the committed guess is exactly what was typed.
fn play_word<S: SaveStore>(session: &mut GameSession<S>, word: &str) -> anyhow::Result<()> {
    while !session.game().row_buffer().is_empty() {
        session.press_backspace()?;
    }
    for ch in word.chars() {
        session.press_letter(ch)?;
    }

    match session.press_enter()? {
        EngineEvent::RowRejected(RowError::NotInWordList) => {
            println!("{}\n", "❌ Not in word list".red().bold());
            // Clear the preserved row so the next line starts fresh
            for _ in 0..5 {
                session.press_backspace()?;
            }
        }
        EngineEvent::RowScored { result, .. } => {
            println!();
            print_grid(session);

            match result {
                Some(GameResult::Won { rows }) => print_win(session, rows),
                Some(GameResult::Lost) => {
                    println!(
                        "\n{} The word was {}.\n",
                        "💀 Out of guesses!".red().bold(),
                        session.game().answer().text().to_uppercase().bold()
                    );
                    print_share_block(session);
                }
                None => {}
            }
        }
        // A full word was typed, so only a terminal game lands here
        _ => {}
    }

    Ok(())
}

fn print_grid<S: SaveStore>(session: &GameSession<S>) {
    for (word, score) in session
        .game()
        .guesses()
        .iter()
        .zip(session.game().scores())
    {
        println!("  {}", colored_guess_row(word, score));
    }
    println!();
}

fn print_win<S: SaveStore>(session: &GameSession<S>, rows: usize) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "          🎉 ✨  Y O U   G O T   I T !  ✨ 🎉          "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    let performance = match rows {
        1 => "🏆 Unbelievable!",
        2 => "⭐ Magnificent!",
        3 => "💫 Splendid!",
        4 => "✨ Great job!",
        5 => "👍 Nice work!",
        _ => "😅 Phew!",
    };
    println!(
        "\n  {} Solved in {} {}.",
        performance.bright_yellow().bold(),
        rows.to_string().bright_cyan().bold(),
        if rows == 1 { "guess" } else { "guesses" }
    );

    let ledger = session.ledger();
    println!(
        "  Streak: {}  (best {})\n",
        ledger.current_streak().to_string().bright_cyan().bold(),
        ledger.longest_streak()
    );

    print_share_block(session);
}

/// Emoji grid suitable for sharing, spoiler-free
fn print_share_block<S: SaveStore>(session: &GameSession<S>) {
    let rows_used = session.game().guesses().len();
    let tries = if session.game().state() == GameState::Won {
        rows_used.to_string()
    } else {
        "X".to_string()
    };
    println!("  wordgrid {tries}/{MAX_ROWS}");
    for score in session.game().scores() {
        println!("  {}", score.to_emoji());
    }
    println!();
}

/// Get user input with a prompt
fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{text}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::store::MemoryStore;
    use crate::wordlists::Lexicon;

    fn session_with_answer(answer: &str, words: &[&str]) -> GameSession<MemoryStore> {
        let words: Vec<Word> = words.iter().map(|w| Word::new(*w).unwrap()).collect();
        GameSession::with_answer(
            Lexicon::new(&words, words.clone()),
            MemoryStore::new(),
            Word::new(answer).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn play_word_commits_exactly_the_typed_word() {
        let mut session = session_with_answer("slate", &["slate", "plate"]);
        play_word(&mut session, "plate").unwrap();

        let guesses: Vec<&str> = session.game().guesses().iter().map(Word::text).collect();
        assert_eq!(guesses, ["plate"]);
    }

    #[test]
    fn play_word_replaces_leftover_row_buffer() {
        // A quit mid-row resumes with a partial buffer; the next line of
        // input must not be appended to it
        let mut session = session_with_answer("slate", &["slate", "plate", "splat"]);
        session.press_letter('s').unwrap();
        assert_eq!(session.game().row_buffer(), "s");

        play_word(&mut session, "plate").unwrap();

        let guesses: Vec<&str> = session.game().guesses().iter().map(Word::text).collect();
        assert_eq!(guesses, ["plate"]);
    }
}
