//! cli
//!
//! Command-line interface layer for ai-flags.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the stderr log subscriber
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`commands`], which call into [`crate::engine`] for the prompt pipeline
//! and [`crate::core::config`] for persistence.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.debug);

    let ctx = engine::Context {
        config_path: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Send diagnostics to stderr; stdout carries hook payloads.
///
/// `--debug` forces debug level, otherwise `RUST_LOG` applies, defaulting
/// to warnings only.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
