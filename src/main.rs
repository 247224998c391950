//! Wordgrid - CLI
//!
//! Terminal word-guess game with TUI and simple CLI modes. Games and
//! statistics persist to a JSON save file between runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordgrid::{
    commands::{print_stats, run_simple},
    core::Word,
    interactive::{App, run_tui},
    session::GameSession,
    store::{JsonFileStore, SaveStore},
    wordlists::{ANSWERS, Lexicon, loader},
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the save file
    #[arg(short = 's', long, global = true, default_value = "wordgrid_save.json")]
    save: String,

    /// Wordlist: 'default' (embedded lists) or path to a custom guess list
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Force the answer for a fresh game (testing aid)
    #[arg(long, global = true, hide = true)]
    answer: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without the TUI)
    Simple,

    /// Show statistics from the save file
    Stats,
}

/// Build the lexicon from the -w flag
///
/// - "default": embedded allowed + answer lists
/// - "<path>": custom guess list from file, embedded answer pool
fn load_lexicon(wordlist_mode: &str) -> Result<Lexicon> {
    match wordlist_mode {
        "default" => Ok(Lexicon::embedded()),
        path => {
            let custom_words = loader::load_from_file(path)
                .with_context(|| format!("failed to load wordlist from {path}"))?;
            Ok(Lexicon::new(
                &custom_words,
                loader::words_from_slice(ANSWERS),
            ))
        }
    }
}

fn build_session(cli: &Cli, store: JsonFileStore) -> Result<GameSession<JsonFileStore>> {
    let lexicon = load_lexicon(&cli.wordlist)?;
    match &cli.answer {
        Some(word) => {
            let answer = Word::new(word)
                .map_err(|e| anyhow::anyhow!("invalid --answer word '{word}': {e}"))?;
            GameSession::with_answer(lexicon, store, answer)
        }
        None => GameSession::new(lexicon, store),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = JsonFileStore::new(&cli.save);

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Stats => {
            let state = store.load()?;
            print_stats(&state.ledger);
            Ok(())
        }
        Commands::Play => run_tui(App::new(build_session(&cli, store)?)),
        Commands::Simple => {
            let mut session = build_session(&cli, store)?;
            run_simple(&mut session)
        }
    }
}
