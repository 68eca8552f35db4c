//! Tool configuration.
//!
//! Looked up in `./rendercv.yaml`, then `<config_dir>/rendercv/config.yaml`.
//! Without either file every setting takes its default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::spelling::{SpellCheck, WordList};

pub mod defaults;

pub use defaults::*;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = "rendercv.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub spelling: SpellingConfig,
}

impl Config {
    /// Load the project config, else the global one, else defaults.
    pub fn load() -> Result<Self> {
        Self::load_first(&[Some(PathBuf::from(PROJECT_CONFIG)), global_config_path()])
    }

    /// Load the first existing file of `candidates`.
    pub fn load_first(candidates: &[Option<PathBuf>]) -> Result<Self> {
        match candidates.iter().flatten().find(|p| p.exists()) {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        // An empty file is a valid, all-defaults config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).context("Failed to parse config")
    }
}

impl SpellingConfig {
    /// Dictionary to load, with `~` expanded.
    ///
    /// An explicit path is returned as is; the default one only when it exists.
    pub fn dictionary_path(&self) -> Option<PathBuf> {
        match &self.dictionary {
            Some(path) => Some(PathBuf::from(shellexpand::tilde(path).to_string())),
            None => Some(PathBuf::from(DEFAULT_DICTIONARY)).filter(|p| p.exists()),
        }
    }

    /// Build the spell checker, or `None` when disabled or no dictionary is available.
    pub fn spell_check(&self) -> Result<Option<SpellCheck>> {
        if !self.enabled {
            return Ok(None);
        }
        let Some(path) = self.dictionary_path() else {
            return Ok(None);
        };

        let words = WordList::load(&path)?;
        Ok(Some(SpellCheck::new(Box::new(words)).allow(&self.allow)))
    }
}

/// `<config_dir>/rendercv/config.yaml`, e.g. `~/.config/rendercv/config.yaml` on Linux.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rendercv").join("config.yaml"))
}
