//! Spell checking of highlight text.
//!
//! The checker itself is a capability handed in by the caller. This module
//! only decides which words to ask about and which answers to report.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Domain terms that are never reported, whatever the checker says.
pub const ALLOWED_WORDS: &[&str] = &[
    "aerostructures",
    "sportsperson",
    "cern",
    "mechatronics",
    "calculix",
    "microcontroller",
    "ansys",
    "nx",
    "aselsan",
    "hrjet",
    "simularge",
    "siemens",
    "dynamometer",
    "dc",
];

/// Anything that is not a lowercase ASCII letter, whitespace or an apostrophe.
const STRIP_PATTERN: &str = r"[^a-z\s']";

/// A dictionary lookup service.
pub trait SpellChecker {
    /// Return the subset of `words` (already lowercased) that the checker does not know.
    fn unknown_words(&self, words: &BTreeSet<String>) -> BTreeSet<String>;
}

/// A checker backed by a plain word list, one word per line.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parse a word list, skipping blank lines and `#` comments.
    pub fn parse(content: &str) -> Self {
        Self::new(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary from {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl SpellChecker for WordList {
    fn unknown_words(&self, words: &BTreeSet<String>) -> BTreeSet<String> {
        words
            .iter()
            .filter(|w| !self.words.contains(w.as_str()))
            .cloned()
            .collect()
    }
}

/// A checker plus the allow-list applied to its answers.
pub struct SpellCheck {
    checker: Box<dyn SpellChecker>,
    allowed: HashSet<String>,
}

impl SpellCheck {
    /// Wrap `checker` with the built-in allow-list.
    pub fn new(checker: Box<dyn SpellChecker>) -> Self {
        Self {
            checker,
            allowed: ALLOWED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Extend the allow-list with extra words.
    pub fn allow<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Words of `sentence` that are unknown to the checker and not allowed, sorted.
    pub fn misspelled(&self, sentence: &str) -> Vec<String> {
        let words = words(sentence);
        if words.is_empty() {
            return Vec::new();
        }

        self.checker
            .unknown_words(&words)
            .into_iter()
            .filter(|w| !self.allowed.contains(w))
            .collect()
    }
}

impl std::fmt::Debug for SpellCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellCheck")
            .field("allowed", &self.allowed.len())
            .finish_non_exhaustive()
    }
}

fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(STRIP_PATTERN).expect("strip pattern is valid"))
}

/// Split a sentence into the lowercase words sent to the checker.
///
/// Hyphens separate words; every other character outside `[a-z']` is dropped.
pub fn words(sentence: &str) -> BTreeSet<String> {
    let lowered = sentence.to_lowercase().replace('-', " ");
    let cleaned = strip_pattern().replace_all(&lowered, "");
    cleaned.split_whitespace().map(str::to_string).collect()
}
