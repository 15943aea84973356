//! TUI application state and logic

use super::keyboard::KeyboardState;
use crate::engine::{GameEvent, GuessEngine, ObserverId};
use crate::stats::Statistics;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};

/// Application state
pub struct App {
    pub engine: GuessEngine,
    events: Receiver<GameEvent>,
    observer: ObserverId,
    pub keyboard: KeyboardState,
    pub hint: String,
    pub show_hint: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Wrap an engine whose first target has already been selected
    #[must_use]
    pub fn new(mut engine: GuessEngine) -> Self {
        let (tx, events) = mpsc::channel();
        let observer = engine.subscribe(tx);

        let hint = engine.state().target_definition;
        let stats = Statistics::new(engine.config().max_attempts());

        let mut app = Self {
            engine,
            events,
            observer,
            keyboard: KeyboardState::new(),
            hint,
            show_hint: true,
            messages: Vec::new(),
            stats,
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries!",
                app.engine.config().word_length(),
                app.engine.config().max_attempts()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Give the engine back, detached from this app's event channel
    #[must_use]
    pub fn into_engine(mut self) -> GuessEngine {
        self.engine.unsubscribe(self.observer);
        self.engine
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.engine.is_over() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.show_hint = !self.show_hint,
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.engine.add_letter(c);
            }
            KeyCode::Backspace => {
                self.engine.remove_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Submit the current input
    pub fn submit(&mut self) {
        let guess = self.engine.current_input().to_string();

        if let Some(feedback) = self.engine.submit_guess() {
            self.keyboard.record(&guess, &feedback);
        } else if !self.engine.is_over() {
            self.add_message("Not enough letters", MessageStyle::Error);
        }

        self.process_events();
    }

    pub fn new_game(&mut self) {
        match self.engine.new_game() {
            Ok(_) => self.add_message("New game started!", MessageStyle::Info),
            Err(err) => self.add_message(&format!("Cannot start game: {err}"), MessageStyle::Error),
        }
        self.process_events();
    }

    /// Apply engine notifications to the UI state
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.stats.record(&event);

            match event {
                GameEvent::TargetSelected { definition, .. } => {
                    self.hint = definition;
                    self.keyboard.clear();
                }
                GameEvent::Won { word, attempts, .. } => {
                    let celebration = match attempts {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                        2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                        3 => "✨ SPLENDID! Three guesses! ✨",
                        4 => "👏 GREAT JOB! Four guesses! 👏",
                        5 => "🎉 NICE WORK! Five guesses! 🎉",
                        _ => "😅 PHEW! Got it! 😅",
                    };
                    self.add_message(celebration, MessageStyle::Success);
                    self.add_message(
                        &format!("{} in {attempts}", word.to_uppercase()),
                        MessageStyle::Success,
                    );
                    self.show_hint = true;
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                GameEvent::Lost { word, .. } => {
                    self.add_message(
                        &format!("Game over! The word was {}", word.to_uppercase()),
                        MessageStyle::Error,
                    );
                    self.show_hint = true;
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
