//! Game state snapshots

use crate::core::Feedback;
use serde::Serialize;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// No target has been selected yet
    AwaitingFirstWord,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost accept no further input
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The chosen target word and its definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub word: String,
    pub definition: String,
}

/// Owned copy of the engine's state
///
/// Nothing in a snapshot aliases the engine, so callers may keep or modify it
/// freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub status: GameStatus,
    /// Number of submitted guesses
    pub attempt_index: usize,
    pub current_input: String,
    /// Submitted guesses, oldest first
    pub history: Vec<String>,
    /// Feedback for each entry of `history`
    pub results: Vec<Feedback>,
    /// Empty until a target has been selected
    pub target_word: String,
    pub target_definition: String,
    pub is_over: bool,
    pub is_won: bool,
    pub is_lost: bool,
}

impl GameState {
    /// Iterate submitted guesses with their feedback
    pub fn guesses(&self) -> impl Iterator<Item = (&str, &Feedback)> + '_ {
        self.history
            .iter()
            .map(String::as_str)
            .zip(self.results.iter())
    }
}
