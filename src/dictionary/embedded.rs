//! Embedded dictionary
//!
//! Bundled word → definition data compiled into the binary.

/// Default dictionary JSON shipped with the game
pub const EMBEDDED_DICTIONARY: &str = include_str!("../../data/dictionary.json");
