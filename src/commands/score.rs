//! Guess scoring command
//!
//! Scores a single guess against a chosen target without playing a game.

use crate::core::{Feedback, Word, score_guess};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not `word_length` ASCII letters.
pub fn score_words(guess: &str, target: &str, word_length: usize) -> Result<ScoreResult, String> {
    let guess = Word::new(guess, word_length).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Word::new(target, word_length).map_err(|e| format!("Invalid target: {e}"))?;

    let feedback = score_guess(guess.text(), target.text())
        .ok_or_else(|| "Guess and target differ in length".to_string())?;

    Ok(ScoreResult {
        guess: guess.into_string(),
        target: target.into_string(),
        feedback,
    })
}
