//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, result: LetterResult) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Correct => text.black().on_green().bold(),
        LetterResult::Present => text.black().on_yellow().bold(),
        LetterResult::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn guess_tiles(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.iter())
        .map(|(letter, result)| letter_tile(letter, result).to_string())
        .collect()
}

/// "1 guess" / "n guesses"
#[must_use]
pub fn guesses_label(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
