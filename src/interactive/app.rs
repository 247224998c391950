//! TUI application state and logic

use crate::engine::{EngineEvent, GameResult};
use crate::session::{GameSession, Notice};
use crate::store::SaveStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the event loop wakes up to expire notices
const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state
pub struct App<S: SaveStore> {
    pub session: GameSession<S>,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl<S: SaveStore> App<S> {
    #[must_use]
    pub fn new(session: GameSession<S>) -> Self {
        Self {
            session,
            notice: None,
            should_quit: false,
        }
    }

    /// Drop the notice once its deadline passes
    pub fn tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }
        if code == KeyCode::Char('n') && modifiers.contains(KeyModifiers::CONTROL) {
            self.new_game()?;
            return Ok(());
        }

        if self.session.game().is_over() {
            // Letters no longer type into the grid, so plain keys are free
            match code {
                KeyCode::Char('n') => self.new_game()?,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return Ok(());
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.session.press_letter(c)?;
            }
            KeyCode::Backspace => {
                self.session.press_backspace()?;
            }
            KeyCode::Enter => self.submit_row()?,
            _ => {}
        }
        Ok(())
    }

    fn submit_row(&mut self) -> Result<()> {
        match self.session.press_enter()? {
            EngineEvent::RowRejected(err) => {
                // The row stays on the grid; the player edits it in place
                self.notice = Some(Notice::transient(err.to_string()));
            }
            EngineEvent::RowScored { result, .. } => {
                self.notice = match result {
                    Some(GameResult::Won { rows }) => {
                        Some(Notice::transient(celebration(rows)))
                    }
                    Some(GameResult::Lost) | None => None,
                };
            }
            EngineEvent::LetterAccepted { .. }
            | EngineEvent::LetterRemoved { .. }
            | EngineEvent::Ignored => {}
        }
        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        self.session.new_game()?;
        self.notice = None;
        Ok(())
    }
}

fn celebration(rows: usize) -> &'static str {
    match rows {
        1 => "🎯 HOLE IN ONE! 🌟",
        2 => "🔥 MAGNIFICENT! 🔥",
        3 => "✨ SPLENDID! ✨",
        4 => "👏 GREAT JOB! 👏",
        5 => "🎉 NICE WORK! 🎉",
        _ => "😅 PHEW! 😅",
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SaveStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SaveStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll instead of blocking so notices expire without a key press
        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
