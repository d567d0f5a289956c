//! preview command - Show how a prompt would be augmented

use anyhow::Result;

use crate::core::flag::join_flags;
use crate::engine::{process_prompt, Context, PromptOutcome};
use crate::ui::output;
use crate::ui::render::format_cli_output;

use super::load_settings;

/// Print the cleaned prompt and the context the hook would add.
pub fn preview(ctx: &Context, prompt: &str, permission_mode: Option<&str>) -> Result<()> {
    let settings = load_settings(ctx);

    match process_prompt(prompt, &settings, permission_mode) {
        PromptOutcome::NoFlags => {
            output::print("No flags detected in prompt.", ctx.verbosity());
        }
        PromptOutcome::Rejected(parsed) => {
            output::print(
                format!(
                    "Flags not recognized or disabled: {}",
                    join_flags(&parsed.flags, ", ")
                ),
                ctx.verbosity(),
            );
        }
        PromptOutcome::Augmented(augmentation) => {
            println!(
                "{}",
                format_cli_output(
                    &augmentation.clean_prompt,
                    &augmentation.flags,
                    &augmentation.context
                )
            );
        }
    }

    Ok(())
}
