//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Example
//!
//! ```yaml
//! subagent:
//!   enabled: true
//!   content: null
//! commit:
//!   enabled: false
//!   content: null
//! test:
//!   enabled: true
//!   content: Write property tests for every parser change.
//! debug:
//!   enabled: true
//!   content: null
//! no_lint:
//!   enabled: true
//!   content: null
//! ```
//!
//! Every key is optional. Missing flags take [`FlagConfig::default`], and
//! unknown keys are ignored so older binaries can read newer files.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::flag::Flag;

/// Read access to per-flag settings.
///
/// The pipeline consumes configuration only through this trait, so callers
/// can supply a snapshot from anywhere (file, test fixture, another tool).
pub trait FlagSettings {
    /// Letters of every enabled flag.
    fn enabled_flags(&self) -> HashSet<String>;

    /// Settings for one flag letter, or `None` for letters that are not flags.
    fn flag_config(&self, letter: &str) -> Option<&FlagConfig>;
}

/// Persisted state for a single flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlagConfig {
    /// Whether this flag is allowed to trigger augmentation.
    pub enabled: bool,

    /// Custom instructions; `None` means use the built-in text.
    pub content: Option<String>,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            content: None,
        }
    }
}

impl FlagConfig {
    /// Custom content, if set to something non-empty.
    ///
    /// An empty string counts as unset.
    pub fn custom_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|content| !content.is_empty())
    }
}

/// Top-level configuration: one [`FlagConfig`] per recognized flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlagsConfig {
    /// Subagent flag (`-s`)
    pub subagent: FlagConfig,

    /// Commit flag (`-c`)
    pub commit: FlagConfig,

    /// Test flag (`-t`)
    pub test: FlagConfig,

    /// Debug flag (`-d`)
    pub debug: FlagConfig,

    /// No-lint flag (`-n`)
    pub no_lint: FlagConfig,
}

impl FlagsConfig {
    /// Settings for a recognized flag.
    pub fn get(&self, flag: Flag) -> &FlagConfig {
        match flag {
            Flag::Subagent => &self.subagent,
            Flag::Commit => &self.commit,
            Flag::Test => &self.test,
            Flag::Debug => &self.debug,
            Flag::NoLint => &self.no_lint,
        }
    }

    /// Mutable settings for a recognized flag.
    pub fn get_mut(&mut self, flag: Flag) -> &mut FlagConfig {
        match flag {
            Flag::Subagent => &mut self.subagent,
            Flag::Commit => &mut self.commit,
            Flag::Test => &mut self.test,
            Flag::Debug => &mut self.debug,
            Flag::NoLint => &mut self.no_lint,
        }
    }
}

impl FlagSettings for FlagsConfig {
    fn enabled_flags(&self) -> HashSet<String> {
        Flag::ALL
            .into_iter()
            .filter(|flag| self.get(*flag).enabled)
            .map(|flag| flag.letter().to_string())
            .collect()
    }

    fn flag_config(&self, letter: &str) -> Option<&FlagConfig> {
        Flag::from_letter(letter).map(|flag| self.get(flag))
    }
}
