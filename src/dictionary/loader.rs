//! Dictionary sources
//!
//! A source produces a [`Dictionary`] on demand. The engine's
//! `initialize` takes any source, so tests can feed it in-memory data while
//! the binary reads JSON from disk or uses the bundled dictionary.

use super::{Dictionary, DictionaryError, EMBEDDED_DICTIONARY};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Something that can produce a word dictionary
pub trait DictionarySource {
    /// Load the dictionary
    ///
    /// # Errors
    ///
    /// Returns a `DictionaryError` if the data cannot be read or parsed.
    fn load(&self) -> Result<Dictionary, DictionaryError>;
}

/// An already-loaded dictionary is its own source
impl DictionarySource for Dictionary {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Ok(self.clone())
    }
}

impl<S: DictionarySource + ?Sized> DictionarySource for Box<S> {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        (**self).load()
    }
}

/// Reads a JSON word → definition file from disk
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::{DictionarySource, JsonFileSource};
///
/// let dict = JsonFileSource::new("data/dictionary.json").load().unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DictionarySource for JsonFileSource {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| DictionaryError::Io {
            path: self.path.clone(),
            source,
        })?;

        let dict = Dictionary::from_json_str(&content)?;
        debug!(path = %self.path.display(), words = dict.len(), "loaded dictionary file");
        Ok(dict)
    }
}

/// The dictionary bundled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DictionarySource for EmbeddedSource {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Dictionary::from_json_str(EMBEDDED_DICTIONARY)
    }
}

/// Applies the data-preparation filters to another source
///
/// Keeps alphabetic words of the configured length and, optionally, only
/// words without repeated letters.
#[derive(Debug, Clone)]
pub struct FilteredSource<S> {
    inner: S,
    word_length: usize,
    unique_letters: bool,
}

impl<S: DictionarySource> FilteredSource<S> {
    pub fn new(inner: S, word_length: usize) -> Self {
        Self {
            inner,
            word_length,
            unique_letters: false,
        }
    }

    /// Also drop words in which a letter repeats
    #[must_use]
    pub fn unique_letters(mut self, enabled: bool) -> Self {
        self.unique_letters = enabled;
        self
    }
}

impl<S: DictionarySource> DictionarySource for FilteredSource<S> {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        let loaded = self.inner.load()?;
        let total = loaded.len();

        let mut dict = loaded.filter_length(self.word_length);
        if self.unique_letters {
            dict = dict.filter_unique_letters();
        }

        debug!(total, kept = dict.len(), "filtered dictionary");
        Ok(dict)
    }
}
