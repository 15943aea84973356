//! Core domain types for Wordle
//!
//! Letter results, guess feedback and word validation. Everything here is
//! pure and free of I/O.

mod feedback;
mod letter;
mod word;

pub use feedback::{Feedback, score_guess};
pub use letter::LetterResult;
pub use word::{Word, WordError};
