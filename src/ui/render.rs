//! ui::render
//!
//! Rendering of pipeline results for the two consumers: the assistant's
//! `UserPromptSubmit` hook (JSON) and humans previewing a prompt (text).
//!
//! # Hook payload
//!
//! ```json
//! {
//!   "hookSpecificOutput": {
//!     "hookEventName": "UserPromptSubmit",
//!     "additionalContext": "<flag_metadata>\n...\n</flag_metadata>\n\n<commit_instructions>..."
//!   }
//! }
//! ```
//!
//! The metadata block is always present. The blank line and the flag
//! context follow only when the context is non-empty.

use serde::Serialize;

use crate::core::flag::join_flags;
use crate::engine::executor::wrap_in_xml_tag;

/// Event name the assistant expects in hook responses.
pub const HOOK_EVENT_NAME: &str = "UserPromptSubmit";

/// Tag wrapping the processed-flags note.
pub const METADATA_TAG: &str = "flag_metadata";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HookOutput {
    hook_specific_output: HookSpecificOutput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HookSpecificOutput {
    hook_event_name: &'static str,
    additional_context: String,
}

/// Build the `additionalContext` string for the hook payload.
pub fn hook_additional_context(clean_prompt: &str, flags: &[String], context: &str) -> String {
    let metadata = format!(
        "Note: Processed flags {}\nYour actual task (without flags): {}",
        join_flags(flags, " "),
        clean_prompt
    );
    let wrapped = wrap_in_xml_tag(METADATA_TAG, &metadata);

    if context.is_empty() {
        wrapped
    } else {
        format!("{}\n\n{}", wrapped, context)
    }
}

/// Render the hook JSON payload, pretty-printed with two-space indent.
pub fn format_hook_output(
    clean_prompt: &str,
    flags: &[String],
    context: &str,
) -> Result<String, serde_json::Error> {
    let output = HookOutput {
        hook_specific_output: HookSpecificOutput {
            hook_event_name: HOOK_EVENT_NAME,
            additional_context: hook_additional_context(clean_prompt, flags, context),
        },
    };
    serde_json::to_string_pretty(&output)
}

/// Render the human-readable preview.
pub fn format_cli_output(prompt: &str, flags: &[String], context: &str) -> String {
    [
        format!("Detected flags: {}", join_flags(flags, ", ")),
        format!("Cleaned prompt: {}", prompt),
        String::new(),
        "Context to be added:".to_string(),
        context.to_string(),
    ]
    .join("\n")
}
