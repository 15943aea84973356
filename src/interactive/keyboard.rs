//! On-screen keyboard letter states

use crate::core::{Feedback, LetterResult};
use rustc_hash::FxHashMap;

/// Keyboard rows in QWERTY order
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best result seen so far for each guessed letter
///
/// A key only ever moves up: absent → present → correct.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterResult>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the feedback of one guess
    pub fn record(&mut self, guess: &str, feedback: &Feedback) {
        for (letter, result) in guess.chars().zip(feedback.iter()) {
            self.letters
                .entry(letter)
                .and_modify(|best| {
                    if result.rank() > best.rank() {
                        *best = result;
                    }
                })
                .or_insert(result);
        }
    }

    /// State of a key, `None` if the letter has not been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
