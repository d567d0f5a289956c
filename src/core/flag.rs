//! core::flag
//!
//! The closed set of prompt flags and the permission-mode vocabulary.
//!
//! # Flags
//!
//! | Letter | Name       | Purpose                                   |
//! |--------|------------|-------------------------------------------|
//! | `s`    | `subagent` | Delegate planned work to parallel agents  |
//! | `c`    | `commit`   | Commit once the task is done              |
//! | `t`    | `test`     | Emphasize test coverage                   |
//! | `d`    | `debug`    | Systematic root cause analysis            |
//! | `n`    | `no_lint`  | Skip linting and type-checking            |
//!
//! Flags travel through the pipeline as plain letters (strings), because the
//! parser can produce tokens that are not flags at all. [`Flag`] is the typed
//! view used wherever a letter has already been recognized.
//!
//! # Example
//!
//! ```
//! use ai_flags::core::flag::{Flag, is_plan_mode};
//!
//! assert_eq!(Flag::from_letter("c"), Some(Flag::Commit));
//! assert_eq!(Flag::from_letter("x"), None);
//! assert!(is_plan_mode(Some("plan")));
//! assert!(!is_plan_mode(None));
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The only permission mode with special meaning.
pub const PLAN_MODE: &str = "plan";

/// Every recognized flag letter, in canonical order.
pub const RECOGNIZED_FLAGS: [&str; 5] = ["s", "c", "t", "d", "n"];

/// Returns true iff the permission mode is exactly `"plan"`.
///
/// Absent modes and every other value are the default (non-plan) case.
pub fn is_plan_mode(permission_mode: Option<&str>) -> bool {
    permission_mode == Some(PLAN_MODE)
}

/// Returns true iff `letter` is one of [`RECOGNIZED_FLAGS`].
pub fn is_recognized(letter: &str) -> bool {
    RECOGNIZED_FLAGS.contains(&letter)
}

/// Errors from resolving user-supplied flag identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlagError {
    #[error("unknown flag '{0}', expected one of: s, c, t, d, n (or subagent, commit, test, debug, no-lint)")]
    Unknown(String),
}

/// A recognized prompt flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    Subagent,
    Commit,
    Test,
    Debug,
    NoLint,
}

impl Flag {
    /// All flags in canonical order.
    pub const ALL: [Flag; 5] = [
        Flag::Subagent,
        Flag::Commit,
        Flag::Test,
        Flag::Debug,
        Flag::NoLint,
    ];

    /// Look up a flag by its single letter.
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "s" => Some(Flag::Subagent),
            "c" => Some(Flag::Commit),
            "t" => Some(Flag::Test),
            "d" => Some(Flag::Debug),
            "n" => Some(Flag::NoLint),
            _ => None,
        }
    }

    /// The single-letter identifier (`-s`, `-c`, ...).
    pub fn letter(self) -> &'static str {
        match self {
            Flag::Subagent => "s",
            Flag::Commit => "c",
            Flag::Test => "t",
            Flag::Debug => "d",
            Flag::NoLint => "n",
        }
    }

    /// The configuration key for this flag.
    pub fn name(self) -> &'static str {
        match self {
            Flag::Subagent => "subagent",
            Flag::Commit => "commit",
            Flag::Test => "test",
            Flag::Debug => "debug",
            Flag::NoLint => "no_lint",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Flag::Subagent => "Delegate planned work to subagents (plan mode only)",
            Flag::Commit => "Create a git commit via /commit when done",
            Flag::Test => "Require comprehensive test coverage",
            Flag::Debug => "Run systematic root cause analysis with the debugger subagent",
            Flag::NoLint => "Skip linting, type-checking, and formatting",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}", self.letter())
    }
}

impl FromStr for Flag {
    type Err = FlagError;

    /// Accepts a letter (`c`, `-c`) or a name (`commit`, `no-lint`, `no_lint`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().trim_start_matches('-').to_ascii_lowercase();
        if let Some(flag) = Flag::from_letter(&key) {
            return Ok(flag);
        }
        let key = key.replace('-', "_");
        Flag::ALL
            .into_iter()
            .find(|flag| flag.name() == key)
            .ok_or_else(|| FlagError::Unknown(s.to_string()))
    }
}

/// Format letters as dashed flags joined by `separator`.
pub fn join_flags(flags: &[String], separator: &str) -> String {
    flags
        .iter()
        .map(|flag| format!("-{}", flag))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_letter(flag.letter()), Some(flag));
        }
    }

    #[test]
    fn recognized_set_matches_variants() {
        let letters: Vec<&str> = Flag::ALL.iter().map(|f| f.letter()).collect();
        assert_eq!(letters, RECOGNIZED_FLAGS);
    }

    #[test]
    fn uppercase_and_digits_are_not_flags() {
        assert!(!is_recognized("S"));
        assert!(!is_recognized("1"));
        assert!(!is_recognized(""));
        assert!(!is_recognized("s-c"));
    }

    #[test]
    fn parse_by_letter_or_name() {
        assert_eq!("c".parse::<Flag>(), Ok(Flag::Commit));
        assert_eq!("-d".parse::<Flag>(), Ok(Flag::Debug));
        assert_eq!("subagent".parse::<Flag>(), Ok(Flag::Subagent));
        assert_eq!("no-lint".parse::<Flag>(), Ok(Flag::NoLint));
        assert_eq!("no_lint".parse::<Flag>(), Ok(Flag::NoLint));
        assert_eq!("Test".parse::<Flag>(), Ok(Flag::Test));
        assert!("x".parse::<Flag>().is_err());
    }

    #[test]
    fn plan_mode_is_exact() {
        assert!(is_plan_mode(Some("plan")));
        assert!(!is_plan_mode(Some("Plan")));
        assert!(!is_plan_mode(Some("default")));
        assert!(!is_plan_mode(Some("")));
        assert!(!is_plan_mode(None));
    }

    #[test]
    fn join_flags_with_separator() {
        let flags = vec!["c".to_string(), "t".to_string()];
        assert_eq!(join_flags(&flags, " "), "-c -t");
        assert_eq!(join_flags(&flags, ", "), "-c, -t");
        assert_eq!(join_flags(&[], " "), "");
    }
}
