use crate::dictionary::DictionaryError;
use thiserror::Error;

/// Errors that prevent a game from starting
///
/// Routine input rejections (full input, incomplete guess, game over) are not
/// errors; the engine reports them through `bool`/`Option` returns.
#[derive(Debug, Error)]
pub enum GameError {
    /// The dictionary holds no word usable as a target
    #[error("No words available")]
    EmptyDictionary,
    /// The dictionary could not be acquired or parsed
    #[error("Failed to load word list")]
    DictionaryLoad(#[source] DictionaryError),
    #[error("invalid game configuration: {0}")]
    InvalidConfig(&'static str),
}
