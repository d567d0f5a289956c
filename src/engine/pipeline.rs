//! engine::pipeline
//!
//! End-to-end processing of one prompt: parse, validate, build handlers,
//! execute.
//!
//! The pipeline fails open. A prompt without trailing flags, or with any
//! unknown or disabled flag, yields an outcome that tells the caller to pass
//! the prompt through untouched.

use crate::core::config::FlagSettings;
use crate::core::parser::{parse_trailing_flags, ParsedPrompt};
use crate::core::validator::validate_flags;
use crate::handlers::HandlerRegistry;

use super::executor::execute_flag_handlers;

/// Extra context produced for a flagged prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// The prompt without its trailing flags.
    pub clean_prompt: String,
    /// The flags that were processed, in order.
    pub flags: Vec<String>,
    /// Joined tagged fragments; may be empty.
    pub context: String,
}

/// What happened to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// No trailing flag run.
    NoFlags,
    /// Flags were found but at least one is unknown or disabled.
    Rejected(ParsedPrompt),
    /// Flags were valid and handlers ran.
    Augmented(Augmentation),
}

impl PromptOutcome {
    /// The augmentation, if the prompt was augmented.
    pub fn augmentation(&self) -> Option<&Augmentation> {
        match self {
            PromptOutcome::Augmented(augmentation) => Some(augmentation),
            _ => None,
        }
    }
}

/// Run the whole pipeline for one prompt against a config snapshot.
///
/// # Example
///
/// ```
/// use ai_flags::core::config::FlagsConfig;
/// use ai_flags::engine::pipeline::{process_prompt, PromptOutcome};
///
/// let outcome = process_prompt("ship it -c", &FlagsConfig::default(), None);
/// let augmentation = outcome.augmentation().unwrap();
/// assert_eq!(augmentation.clean_prompt, "ship it");
/// assert!(augmentation.context.starts_with("<commit_instructions>"));
///
/// assert_eq!(
///     process_prompt("ship it", &FlagsConfig::default(), None),
///     PromptOutcome::NoFlags
/// );
/// ```
pub fn process_prompt(
    prompt: &str,
    settings: &impl FlagSettings,
    permission_mode: Option<&str>,
) -> PromptOutcome {
    let Some(parsed) = parse_trailing_flags(prompt) else {
        tracing::debug!("no trailing flags");
        return PromptOutcome::NoFlags;
    };

    let enabled = settings.enabled_flags();
    if !validate_flags(&parsed.flags, &enabled) {
        tracing::debug!(flags = ?parsed.flags, "flags unknown or disabled, passing prompt through");
        return PromptOutcome::Rejected(parsed);
    }

    let registry = HandlerRegistry::from_settings(settings);
    let context = execute_flag_handlers(&parsed.flags, &registry, permission_mode);
    tracing::debug!(
        flags = ?parsed.flags,
        permission_mode = permission_mode.unwrap_or("none"),
        context_len = context.len(),
        "augmented prompt"
    );

    PromptOutcome::Augmented(Augmentation {
        clean_prompt: parsed.clean_prompt,
        flags: parsed.flags,
        context,
    })
}
