//! core::validator
//!
//! Gate that decides whether a parsed flag list may trigger augmentation.
//!
//! A list passes only if every letter is recognized and enabled. The list is
//! never filtered: one bad flag rejects the whole prompt, and the caller then
//! treats the input as ordinary text.

use std::collections::HashSet;

use super::flag::is_recognized;

/// Returns true iff every flag is recognized and present in `enabled_flags`.
///
/// An empty list is trivially valid.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use ai_flags::core::validator::validate_flags;
///
/// let enabled: HashSet<String> = ["c", "t"].iter().map(|s| s.to_string()).collect();
/// assert!(validate_flags(&["c".to_string()], &enabled));
/// assert!(!validate_flags(&["d".to_string()], &enabled));
/// ```
pub fn validate_flags(flags: &[String], enabled_flags: &HashSet<String>) -> bool {
    flags
        .iter()
        .all(|flag| is_recognized(flag) && enabled_flags.contains(flag))
}
