//! Default values and configuration structs with default implementations.

use serde::Deserialize;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

/// Word list used when `spelling.dictionary` is not set and the file exists.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

default_fn!(default_true, bool, true);

/// Spell checking of highlights
#[derive(Debug, Clone, Deserialize)]
pub struct SpellingConfig {
    /// Report possibly misspelled words as warnings
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Word list, one word per line (`~` is expanded)
    #[serde(default)]
    pub dictionary: Option<String>,
    /// Extra words never reported
    #[serde(default)]
    pub allow: Vec<String>,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            dictionary: None,
            allow: Vec::new(),
        }
    }
}
