//! Game configuration

use super::GameError;
use serde::Serialize;

/// Fixed parameters of a game
///
/// Immutable once a [`GuessEngine`](super::GuessEngine) is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

impl GameConfig {
    /// Standard Wordle word length
    pub const DEFAULT_WORD_LENGTH: usize = 5;

    /// Standard Wordle number of guesses
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

    /// Longest word a game can use
    pub const MAX_WORD_LENGTH: usize = 32;

    /// Most guesses a game can allow
    pub const MAX_ATTEMPTS_LIMIT: usize = 64;

    /// Create a configuration
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfig` if either value is zero or above
    /// [`MAX_WORD_LENGTH`](Self::MAX_WORD_LENGTH) /
    /// [`MAX_ATTEMPTS_LIMIT`](Self::MAX_ATTEMPTS_LIMIT).
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, GameError> {
        if word_length == 0 {
            return Err(GameError::InvalidConfig("word length must be positive"));
        }
        if max_attempts == 0 {
            return Err(GameError::InvalidConfig("max attempts must be positive"));
        }
        if word_length > Self::MAX_WORD_LENGTH {
            return Err(GameError::InvalidConfig("word length is too large"));
        }
        if max_attempts > Self::MAX_ATTEMPTS_LIMIT {
            return Err(GameError::InvalidConfig("max attempts is too large"));
        }

        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: Self::DEFAULT_WORD_LENGTH,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_wordle() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_attempts(), 6);
    }

    #[test]
    fn zero_values_rejected() {
        assert!(matches!(
            GameConfig::new(0, 6),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(5, 0),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(GameConfig::new(6, 3).is_ok());
    }

    #[test]
    fn oversized_values_rejected() {
        assert!(matches!(
            GameConfig::new(5, usize::MAX),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(5, 65535),
            Err(GameError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::new(GameConfig::MAX_WORD_LENGTH + 1, 6),
            Err(GameError::InvalidConfig(_))
        ));

        let widest =
            GameConfig::new(GameConfig::MAX_WORD_LENGTH, GameConfig::MAX_ATTEMPTS_LIMIT).unwrap();
        assert_eq!(widest.max_attempts(), GameConfig::MAX_ATTEMPTS_LIMIT);
    }
}
