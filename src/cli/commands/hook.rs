//! hook command - Respond to a UserPromptSubmit hook event
//!
//! Input is the event JSON on stdin. Only `prompt` and `permission_mode`
//! are read; every other field is ignored. Output is either the hook JSON
//! payload or nothing at all.

use std::io::Read;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::core::config::FlagSettings;
use crate::engine::{process_prompt, Context, PromptOutcome};
use crate::ui::render::format_hook_output;

use super::load_settings;

/// Errors from turning a hook event into a response.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("invalid hook input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("failed to render hook output: {0}")]
    Render(#[source] serde_json::Error),
}

/// The fields of a hook event that matter here.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HookInput {
    /// The prompt the user submitted.
    #[serde(default)]
    pub prompt: String,

    /// The assistant's current permission mode, e.g. `"plan"`.
    #[serde(default)]
    pub permission_mode: Option<String>,
}

/// Build the hook response for a raw event.
///
/// Returns `Ok(None)` when the prompt should pass through untouched.
/// Input that is not valid UTF-8 is an [`HookError::InvalidInput`].
pub fn hook_response(
    raw_input: impl AsRef<[u8]>,
    settings: &impl FlagSettings,
) -> Result<Option<String>, HookError> {
    let input: HookInput =
        serde_json::from_slice(raw_input.as_ref()).map_err(HookError::InvalidInput)?;

    match process_prompt(&input.prompt, settings, input.permission_mode.as_deref()) {
        PromptOutcome::Augmented(augmentation) => format_hook_output(
            &augmentation.clean_prompt,
            &augmentation.flags,
            &augmentation.context,
        )
        .map(Some)
        .map_err(HookError::Render),
        PromptOutcome::NoFlags | PromptOutcome::Rejected(_) => Ok(None),
    }
}

/// Read a hook event from stdin and print the response, if any.
pub fn hook(ctx: &Context) -> Result<()> {
    let mut raw_input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut raw_input)
        .context("Failed to read hook input from stdin")?;

    let settings = load_settings(ctx);

    match hook_response(&raw_input, &settings) {
        Ok(Some(payload)) => println!("{}", payload),
        Ok(None) => {}
        Err(HookError::InvalidInput(err)) => {
            // Never block a prompt over a malformed event.
            tracing::warn!(error = %err, "ignoring undecodable hook input");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
