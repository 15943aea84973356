//! Session statistics
//!
//! Counts games played in the current process. Nothing is persisted.

use crate::engine::{GameConfig, GameEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n - 1]` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Empty statistics with one distribution slot per allowed guess
    ///
    /// Slots beyond `GameConfig::MAX_ATTEMPTS_LIMIT` are added on demand.
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
            guess_distribution: vec![0; max_attempts.min(GameConfig::MAX_ATTEMPTS_LIMIT)],
        }
    }

    /// Update from an engine event; non-terminal events are ignored
    pub fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Won { attempts, .. } => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if let Some(i) = attempts.checked_sub(1) {
                    if i >= self.guess_distribution.len() {
                        self.guess_distribution.resize(i + 1, 0);
                    }
                    self.guess_distribution[i] += 1;
                }
            }
            GameEvent::Lost { .. } => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            GameEvent::TargetSelected { .. } => {}
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
