//! Guess scoring and feedback representation
//!
//! Feedback is the ordered sequence of [`LetterResult`]s produced by scoring
//! a guess against the target, positionally aligned with the guess.

use super::LetterResult;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Feedback for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Feedback(Vec<LetterResult>);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// Implements Wordle's duplicate-letter rules. Returns `None` when the
    /// two words differ in length.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches correct and consume the
    ///    target letter at that position
    /// 2. Second pass: for every other position, claim the earliest
    ///    unconsumed target occurrence of the same letter and mark it present
    ///
    /// A target letter is claimed at most once, so the number of correct and
    /// present marks for a letter never exceeds its count in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterResult::{Absent, Correct}};
    ///
    /// let feedback = Feedback::calculate("stamp", "stare").unwrap();
    /// assert_eq!(feedback.as_slice(), &[Correct, Correct, Correct, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Option<Self> {
        let guess: Vec<char> = guess.chars().collect();
        let mut target: Vec<Option<char>> = target.chars().map(Some).collect();

        if guess.len() != target.len() {
            return None;
        }

        let mut result = vec![LetterResult::Absent; guess.len()];

        // First pass: exact matches
        for (i, &letter) in guess.iter().enumerate() {
            if target[i] == Some(letter) {
                result[i] = LetterResult::Correct;
                target[i] = None;
            }
        }

        // Second pass: claim the earliest unconsumed occurrence
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == LetterResult::Correct {
                continue;
            }

            if let Some(slot) = target.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = LetterResult::Present;
                *slot = None;
            }
        }

        Some(Self(result))
    }

    /// Build feedback from explicit results
    #[must_use]
    pub const fn from_results(results: Vec<LetterResult>) -> Self {
        Self(results)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LetterResult] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterResult> + '_ {
        self.0.iter().copied()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&r| r == LetterResult::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&r| r == LetterResult::Correct).count()
    }

    /// Count the number of present positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&r| r == LetterResult::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.to_emoji()).collect()
    }
}

impl Index<usize> for Feedback {
    type Output = LetterResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(LetterResult::from_char)
            .collect::<Option<Vec<_>>>()
            .filter(|results| !results.is_empty())
            .map(Self)
            .ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score `guess` against `target`; `None` when their lengths differ
///
/// See [`Feedback::calculate`].
#[must_use]
pub fn score_guess(guess: &str, target: &str) -> Option<Feedback> {
    Feedback::calculate(guess, target)
}
