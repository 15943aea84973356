//! Word dictionaries
//!
//! A dictionary maps each candidate target word to its definition. It is
//! loaded from a JSON object (`{"word": "definition", ...}`) either bundled
//! into the binary or read from disk.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_DICTIONARY;
pub use loader::{DictionarySource, EmbeddedSource, FilteredSource, JsonFileSource};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Error type for dictionary acquisition
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dictionary JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Mapping from word to definition
///
/// Words are lowercased on insertion and kept in sorted order, so the same
/// random index always selects the same entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from a JSON object of word → definition
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Parse` if the input is not a JSON object
    /// with string values.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_json_str(r#"{"Stare": "To look fixedly."}"#).unwrap();
    /// assert_eq!(dict.get("stare"), Some("To look fixedly."));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    /// Build a dictionary from (word, definition) pairs
    pub fn from_entries<I, W, D>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, D)>,
        W: Into<String>,
        D: Into<String>,
    {
        let mut dict = Self::new();
        for (word, definition) in entries {
            dict.insert(word, definition);
        }
        dict
    }

    /// Insert a word, replacing any previous definition
    pub fn insert(&mut self, word: impl Into<String>, definition: impl Into<String>) {
        let word = word.into().trim().to_lowercase();
        self.entries.insert(word, definition.into());
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(word, definition)| (word.as_str(), definition.as_str()))
    }

    /// Keep only alphabetic words of exactly `length` letters
    #[must_use]
    pub fn filter_length(self, length: usize) -> Self {
        self.retain(|word| Word::new(word, length).is_ok())
    }

    /// Keep only words in which no letter repeats
    #[must_use]
    pub fn filter_unique_letters(self) -> Self {
        self.retain(has_unique_letters)
    }

    fn retain(mut self, mut keep: impl FnMut(&str) -> bool) -> Self {
        self.entries.retain(|word, _| keep(word.as_str()));
        self
    }
}

impl<W: Into<String>, D: Into<String>> FromIterator<(W, D)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

fn has_unique_letters(word: &str) -> bool {
    let mut seen = FxHashSet::default();
    word.chars().all(|ch| seen.insert(ch))
}
