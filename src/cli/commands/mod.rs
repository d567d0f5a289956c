//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves and loads configuration
//! 2. Calls the engine or the config store
//! 3. Formats and displays output
//!
//! Prompt-facing commands (`hook`, `preview`) fail open: configuration
//! problems fall back to defaults instead of aborting.

mod completion;
mod config_cmd;
mod flags_cmd;
mod hook;
mod preview;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use config_cmd::{
    clear_content as config_clear_content, disable as config_disable, enable as config_enable,
    list as config_list, path as config_path, reset as config_reset,
    set_content as config_set_content, show as config_show,
};
pub use flags_cmd::flags;
pub use hook::{hook, hook_response, HookError, HookInput};
pub use preview::preview;

use crate::cli::args::{Command, ConfigAction};
use crate::core::config::{ConfigFile, FlagsConfig};
use crate::engine::Context;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Hook => hook(ctx),
        Command::Preview {
            prompt,
            permission_mode,
        } => preview(ctx, &prompt.join(" "), permission_mode.as_deref()),
        Command::Flags => flags(ctx),
        Command::Config { action } => match action {
            ConfigAction::List => config_list(ctx),
            ConfigAction::Show { flag } => config_show(ctx, flag),
            ConfigAction::Path => config_path(ctx),
            ConfigAction::Enable { flag } => config_enable(ctx, flag),
            ConfigAction::Disable { flag } => config_disable(ctx, flag),
            ConfigAction::SetContent { flag, content } => config_set_content(ctx, flag, &content),
            ConfigAction::ClearContent { flag } => config_clear_content(ctx, flag),
            ConfigAction::Reset => config_reset(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}

/// Resolve the config file for this invocation.
fn config_file(ctx: &Context) -> Result<ConfigFile> {
    ConfigFile::locate(ctx.config_path.as_deref()).context("Failed to locate config file")
}

/// Load configuration for prompt processing, never failing.
///
/// Warnings are reported on stderr and defaults are used.
fn load_settings(ctx: &Context) -> FlagsConfig {
    let file = match ConfigFile::locate(ctx.config_path.as_deref()) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(error = %err, "cannot locate config, using defaults");
            return FlagsConfig::default();
        }
    };

    let result = file.load();
    for warning in &result.warnings {
        tracing::debug!(path = %warning.path.display(), "{}", warning.message);
    }
    result.config
}

/// Load configuration for editing.
///
/// Unlike the prompt path this is strict: a file that exists but cannot be
/// read or parsed is an error, so an edit never overwrites it with defaults.
fn load_for_edit(ctx: &Context) -> Result<(ConfigFile, FlagsConfig)> {
    let file = config_file(ctx)?;
    let config = file
        .try_load()
        .with_context(|| {
            format!(
                "Refusing to edit unreadable config; fix it or run 'config reset' ({})",
                file.path().display()
            )
        })?
        .unwrap_or_default();
    Ok((file, config))
}
