//! Per-letter feedback classification

use serde::Serialize;
use std::fmt;

/// Result for a single letter position of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterResult {
    /// Letter matches the target at the same position
    Correct,
    /// Letter occurs at another, unclaimed position of the target
    Present,
    /// No unclaimed occurrence of the letter remains in the target
    Absent,
}

impl LetterResult {
    /// Ordering used when merging results for the same letter: a key shown
    /// as correct never goes back to present or absent.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Emoji tile for this result
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_correct_above_present_above_absent() {
        assert!(LetterResult::Correct.rank() > LetterResult::Present.rank());
        assert!(LetterResult::Present.rank() > LetterResult::Absent.rank());
    }

    #[test]
    fn from_char_accepts_letters_and_emoji() {
        assert_eq!(LetterResult::from_char('g'), Some(LetterResult::Correct));
        assert_eq!(LetterResult::from_char('🟨'), Some(LetterResult::Present));
        assert_eq!(LetterResult::from_char('_'), Some(LetterResult::Absent));
        assert_eq!(LetterResult::from_char('x'), None);
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(LetterResult::Present.to_string(), "present");
    }

    #[test]
    fn serializes_as_lowercase_tag() {
        let json = serde_json::to_string(&LetterResult::Correct).unwrap();
        assert_eq!(json, "\"correct\"");
    }
}
