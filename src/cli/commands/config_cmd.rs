//! config command - View or change flag configuration

use anyhow::{Context as _, Result};

use crate::core::config::FlagsConfig;
use crate::core::flag::Flag;
use crate::engine::Context;
use crate::handlers::defaults;
use crate::ui::output;

use super::{config_file, load_for_edit};

/// List every flag with its state.
pub fn list(ctx: &Context) -> Result<()> {
    let file = config_file(ctx)?;
    let result = file.load();
    for warning in &result.warnings {
        output::warn(&warning.message, ctx.verbosity());
    }

    let source = if result.from_file {
        file.path().display().to_string()
    } else {
        format!("{} (not found, using defaults)", file.path().display())
    };
    println!("# Config file: {}", source);

    let rows: Vec<String> = Flag::ALL
        .into_iter()
        .map(|flag| {
            let config = result.config.get(flag);
            format!(
                "{} {} = {} ({})",
                flag,
                flag.name(),
                if config.enabled { "enabled" } else { "disabled" },
                if config.custom_content().is_some() {
                    "custom content"
                } else {
                    "default content"
                }
            )
        })
        .collect();
    println!("{}", output::format_list(&rows, ""));

    Ok(())
}

/// Print the content a flag would contribute.
pub fn show(ctx: &Context, flag: Flag) -> Result<()> {
    let file = config_file(ctx)?;
    let result = file.load();
    for warning in &result.warnings {
        output::warn(&warning.message, ctx.verbosity());
    }
    let content = result
        .config
        .get(flag)
        .custom_content()
        .unwrap_or_else(|| defaults::for_flag(flag));
    println!("{}", content);
    Ok(())
}

/// Print the resolved config path.
pub fn path(ctx: &Context) -> Result<()> {
    let file = config_file(ctx)?;
    println!("{}", file.path().display());
    Ok(())
}

/// Enable a flag.
pub fn enable(ctx: &Context, flag: Flag) -> Result<()> {
    update(ctx, |config| config.get_mut(flag).enabled = true)?;
    output::success(format!("Enabled {} ({})", flag, flag.name()), ctx.verbosity());
    Ok(())
}

/// Disable a flag.
pub fn disable(ctx: &Context, flag: Flag) -> Result<()> {
    update(ctx, |config| config.get_mut(flag).enabled = false)?;
    output::success(format!("Disabled {} ({})", flag, flag.name()), ctx.verbosity());
    Ok(())
}

/// Replace a flag's built-in content.
pub fn set_content(ctx: &Context, flag: Flag, content: &str) -> Result<()> {
    if content.trim().is_empty() {
        anyhow::bail!("Content cannot be empty; use 'config clear-content' to restore the default");
    }
    update(ctx, |config| {
        config.get_mut(flag).content = Some(content.to_string())
    })?;
    output::success(format!("Set custom content for {}", flag), ctx.verbosity());
    Ok(())
}

/// Restore a flag's built-in content.
pub fn clear_content(ctx: &Context, flag: Flag) -> Result<()> {
    update(ctx, |config| config.get_mut(flag).content = None)?;
    output::success(format!("Cleared custom content for {}", flag), ctx.verbosity());
    Ok(())
}

/// Restore the default configuration.
pub fn reset(ctx: &Context) -> Result<()> {
    let file = config_file(ctx)?;
    file.reset().context("Failed to reset config")?;
    output::success(
        format!("Reset configuration at {}", file.path().display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// Load, modify, and save the config.
fn update(ctx: &Context, change: impl FnOnce(&mut FlagsConfig)) -> Result<()> {
    let (file, mut config) = load_for_edit(ctx)?;
    change(&mut config);
    file.save(&config).context("Failed to write config")
}
