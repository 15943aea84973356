//! Game engine
//!
//! [`GuessEngine`] runs one game: it selects a target from a dictionary,
//! accumulates letters, scores guesses and reports the outcome to observers.

mod config;
mod error;
mod events;
mod game;
mod state;

pub use config::GameConfig;
pub use error::GameError;
pub use events::{GameEvent, GameObserver, ObserverId};
pub use game::GuessEngine;
pub use state::{GameState, GameStatus, Target};
