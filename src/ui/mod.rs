//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware messages for humans
//! - [`render`] - Hook JSON payload and CLI preview text
//!
//! # Design
//!
//! Stdout belongs to whatever the command produces (hook payload, preview,
//! listings). Warnings, errors, and diagnostics go to stderr.

pub mod output;
pub mod render;
