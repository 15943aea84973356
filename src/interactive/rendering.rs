//! TUI rendering with ratatui
//!
//! Board, keyboard, hint and message panels for the game.

use super::app::{App, MessageStyle};
use super::keyboard::KEY_ROWS;
use crate::core::LetterResult;
use crate::engine::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board_height = u16::try_from(app.engine.config().max_attempts())
        .unwrap_or(u16::MAX)
        .saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board + side panels
            Constraint::Length(5),         // Keyboard
            Constraint::Length(3),         // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Hint and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Background color for a scored tile or key
const fn result_color(result: LetterResult) -> Color {
    match result {
        LetterResult::Correct => Color::Green,
        LetterResult::Present => Color::Yellow,
        LetterResult::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, result: Option<LetterResult>) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    let style = match result {
        Some(result) => Style::default()
            .fg(Color::Black)
            .bg(result_color(result))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    Span::styled(text, style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();
    let word_length = app.engine.config().word_length();
    let max_attempts = app.engine.config().max_attempts();

    let mut lines: Vec<Line> = state
        .guesses()
        .map(|(guess, feedback)| {
            let tiles: Vec<Span> = guess
                .chars()
                .zip(feedback.iter())
                .map(|(letter, result)| tile(letter, Some(result)))
                .collect();
            Line::from(tiles)
        })
        .collect();

    if !state.is_over && lines.len() < max_attempts {
        let mut tiles: Vec<Span> = state.current_input.chars().map(|c| tile(c, None)).collect();
        tiles.extend((state.current_input.len()..word_length).map(|_| tile('_', None)));
        lines.push(Line::from(tiles));
    }

    while lines.len() < max_attempts {
        let empty: Vec<Span> = (0..word_length)
            .map(|_| Span::styled(" · ", Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(empty));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Hint
            Constraint::Percentage(60), // Messages
        ])
        .split(area);

    render_hint(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.show_hint {
        Line::from(vec![
            Span::styled("Hint: ", Style::default().fg(Color::Cyan)),
            Span::raw(app.hint.as_str()),
        ])
    } else {
        Line::from(Span::styled(
            "Press TAB to show the hint",
            Style::default().fg(Color::DarkGray),
        ))
    };

    let hint = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Definition ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(hint, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .chars()
                .map(|letter| match app.keyboard.get(letter) {
                    Some(result) => tile(letter, Some(result)),
                    None => Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        Style::default().fg(Color::Black).bg(Color::Gray),
                    ),
                })
                .collect();
            Line::from(keys)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status = app.engine.status();
    let mode_text = match status {
        GameStatus::AwaitingFirstWord => "Waiting for a word".to_string(),
        GameStatus::InProgress => format!(
            "Guess {}/{}",
            app.engine.attempts() + 1,
            app.engine.config().max_attempts()
        ),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Out of guesses".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.best_streak
    );
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[2]);

    let help_text = if status.is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit | TAB: Hint"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
