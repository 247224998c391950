//! TUI rendering with ratatui
//!
//! Visualizations for the word-guess game interface.

use super::app::App;
use crate::core::{LetterOutcome, MAX_ROWS, WORD_LEN};
use crate::engine::GameState;
use crate::store::SaveStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: SaveStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Grid + side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Notice / help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDGRID")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn outcome_style(outcome: LetterOutcome) -> Style {
    let bg = match outcome {
        LetterOutcome::Correct => Color::Green,
        LetterOutcome::Present => Color::Yellow,
        LetterOutcome::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_grid<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = app.session.game();
    let mut lines = vec![Line::default()];

    for row in 0..MAX_ROWS {
        let mut spans = Vec::with_capacity(WORD_LEN * 2);

        if let (Some(word), Some(score)) = (game.guesses().get(row), game.scores().get(row)) {
            for (i, ch) in word.text().chars().enumerate() {
                spans.push(Span::styled(
                    format!(" {} ", ch.to_ascii_uppercase()),
                    outcome_style(score.outcome_at(i)),
                ));
                spans.push(Span::raw(" "));
            }
        } else if game.state() == GameState::InProgress && row == game.cursor().row() {
            // Current row shows what is typed so far
            let buffer = game.row_buffer();
            for i in 0..WORD_LEN {
                let cell = buffer
                    .chars()
                    .nth(i)
                    .map_or_else(|| " _ ".to_string(), |c| {
                        format!(" {} ", c.to_ascii_uppercase())
                    });
                spans.push(Span::styled(
                    cell,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LEN {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::default());
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_info_panel<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_game_state(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_game_state<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let game = app.session.game();
    let content = match game.state() {
        GameState::InProgress => vec![
            Line::from(format!(
                "Guess {} of {MAX_ROWS}",
                game.guesses().len() + 1
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Type a five-letter word, Enter to submit",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        GameState::Won => vec![
            Line::from(Span::styled(
                format!("🎉 Won in {}!", game.guesses().len()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press 'n' for a new game, 'q' to quit"),
        ],
        GameState::Lost => vec![
            Line::from(Span::styled(
                format!("💀 The word was {}", game.answer().text().to_uppercase()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Press 'n' for a new game, 'q' to quit"),
        ],
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_stats<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let ledger = app.session.ledger();
    let lexicon = app.session.lexicon();

    let mut lines = vec![
        Line::from(format!(
            "Played: {}  Won: {}  ({:.0}%)",
            ledger.games_played(),
            ledger.games_won(),
            ledger.win_rate() * 100.0
        )),
        Line::from(format!(
            "Streak: {}  Best: {}",
            ledger.current_streak(),
            ledger.longest_streak()
        )),
        Line::from(Span::styled(
            format!(
                "Words: {} guessable, {} answers",
                lexicon.allowed_count(),
                lexicon.answer_count()
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let distribution = ledger.guess_distribution();
    let max = distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in distribution.iter().enumerate() {
        let bar_len = if max == 0 {
            0
        } else {
            (count * 16).div_ceil(max) as usize
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled("█".repeat(bar_len), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hints = app.session.game().hints();

    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len());
    for keys in KEYBOARD_ROWS {
        let mut spans = Vec::with_capacity(keys.len() * 2);
        for ch in keys.chars() {
            let style = hints.hint(ch).map_or_else(
                || Style::default().fg(Color::White),
                outcome_style,
            );
            spans.push(Span::styled(format!(" {} ", ch.to_ascii_uppercase()), style));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status<S: SaveStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (text, color) = app.notice.as_ref().map_or_else(
        || {
            (
                "Enter: Submit | Backspace: Delete | Ctrl-N: New Game | Esc: Quit",
                Color::DarkGray,
            )
        },
        |notice| (notice.text(), Color::Red),
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}
