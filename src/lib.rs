//! Wordle Game
//!
//! A single-player Wordle engine with duplicate-aware scoring, a terminal UI
//! and a line-based CLI.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterResult, score_guess};
//! use wordle_game::dictionary::Dictionary;
//! use wordle_game::engine::{GameConfig, GuessEngine};
//!
//! // Score a guess directly; the second E finds no unclaimed E left
//! let feedback = score_guess("speed", "abide").unwrap();
//! assert_eq!(feedback[2], LetterResult::Present);
//! assert_eq!(feedback[3], LetterResult::Absent);
//!
//! // Or play a seeded game
//! let dict = Dictionary::from_entries([("stare", "To look fixedly.")]);
//! let mut engine = GuessEngine::with_seed(GameConfig::default(), 42);
//! engine.initialize(&dict).unwrap();
//! for letter in "stare".chars() {
//!     engine.add_letter(letter);
//! }
//! assert!(engine.submit_guess().unwrap().is_perfect());
//! ```

// Core domain types
pub mod core;

// Word/definition data
pub mod dictionary;

// Game engine
pub mod engine;

// Session statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
