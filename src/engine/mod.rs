//! engine
//!
//! Orchestrates a prompt through the flag lifecycle:
//! Parse -> Validate -> Build handlers -> Execute.
//!
//! # Architecture
//!
//! ```text
//! raw prompt --parse--> (clean prompt, flags)
//!            --validate(config)--> approved flags
//!            --execute(registry, mode)--> combined context
//! ```
//!
//! - [`executor`] - Runs handlers in flag order and joins tagged fragments
//! - [`pipeline`] - The end-to-end entry point used by every command
//!
//! # Invariants
//!
//! - Output order equals flag order; duplicates are not collapsed
//! - Empty handler content never produces a tag
//! - Subagent content requires plan mode at both the executor and the handler
//! - Each invocation builds its own registry; nothing is shared between calls

pub mod executor;
pub mod pipeline;

pub use executor::{execute_flag_handlers, wrap_in_xml_tag};
pub use pipeline::{process_prompt, Augmentation, PromptOutcome};

use std::path::PathBuf;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Config file override (`--config`).
    pub config_path: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// Output verbosity implied by the global flags.
    pub fn verbosity(&self) -> crate::ui::output::Verbosity {
        crate::ui::output::Verbosity::from_flags(self.quiet, self.debug)
    }
}
