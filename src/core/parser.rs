//! core::parser
//!
//! Extraction of trailing flags from free-form prompt text.
//!
//! # Grammar
//!
//! After trimming, the prompt must decompose as
//! `<main><whitespace><flag-run>` where the flag run is one or more `-x`
//! tokens (`x` a lowercase ASCII letter) separated by optional whitespace,
//! anchored at the end of the text. `<main>` may span several lines.
//!
//! Anything else is a no-match, which is the ordinary case for prompts
//! without flags and is reported as `None`.
//!
//! # Quirks
//!
//! - Flag-only input with two or more tokens matches: `"-s -c"` parses as
//!   main `"-s"` with flags `["c"]`. A single `"-s"` does not match.
//! - "Whitespace" also covers the ASCII information separators
//!   U+001C..U+001F, so `"task\x1c-s"` parses like `"task -s"`.
//! - Tokens glued together (`"task -s-c"`) come back as one token `"s-c"`,
//!   which validation rejects.
//!
//! # Example
//!
//! ```
//! use ai_flags::core::parser::parse_trailing_flags;
//!
//! let parsed = parse_trailing_flags("fix the bug -d -c").unwrap();
//! assert_eq!(parsed.clean_prompt, "fix the bug");
//! assert_eq!(parsed.flags, vec!["d", "c"]);
//!
//! assert!(parse_trailing_flags("my -s task").is_none());
//! ```

use std::sync::OnceLock;

use regex::Regex;

/// A prompt split into its task text and trailing flag letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    /// The prompt with the trailing flag run removed, trimmed.
    pub clean_prompt: String,
    /// Flag letters in order of appearance; duplicates preserved.
    pub flags: Vec<String>,
}

fn trailing_flags_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Lazy main so the flag run captures every trailing token.
        Regex::new(r"(?s)^(.*?)[\s\x1C-\x1F]+((?:-[a-z][\s\x1C-\x1F]*)+)$")
            .expect("trailing flag pattern is valid")
    })
}

/// Whitespace for prompt purposes: Unicode `White_Space` plus the ASCII
/// information separators U+001C..U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1C'..='\x1F').contains(&c)
}

/// Split trailing `-x` flags off a prompt.
///
/// Returns `None` when the prompt has no trailing flag run.
pub fn parse_trailing_flags(prompt: &str) -> Option<ParsedPrompt> {
    let captures = trailing_flags_pattern().captures(prompt.trim_matches(is_separator))?;

    let clean_prompt = captures
        .get(1)?
        .as_str()
        .trim_matches(is_separator)
        .to_string();
    let flags = captures
        .get(2)?
        .as_str()
        .split(is_separator)
        .filter(|token| token.starts_with('-'))
        .map(|token| token.trim_matches('-').to_string())
        .collect();

    Some(ParsedPrompt {
        clean_prompt,
        flags,
    })
}
