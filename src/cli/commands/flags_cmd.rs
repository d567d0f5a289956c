//! flags command - List recognized flags

use anyhow::Result;

use crate::core::flag::Flag;
use crate::engine::Context;
use crate::handlers::HandlerRegistry;
use crate::ui::output;

use super::load_settings;

/// List every recognized flag with its tag, state, and purpose.
pub fn flags(ctx: &Context) -> Result<()> {
    let settings = load_settings(ctx);
    let registry = HandlerRegistry::from_settings(&settings);

    let rows: Vec<String> = Flag::ALL
        .into_iter()
        .map(|flag| {
            let tag = registry
                .get(flag.letter())
                .map(|handler| handler.xml_tag())
                .unwrap_or("-");
            let state = if settings.get(flag).enabled {
                "enabled"
            } else {
                "disabled"
            };
            format!(
                "{:<3} {:<9} {:<9} <{}>  {}",
                flag.to_string(),
                flag.name(),
                state,
                tag,
                flag.description()
            )
        })
        .collect();

    println!("{}", output::format_list(&rows, ""));
    Ok(())
}
