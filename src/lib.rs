//! ai-flags - Trailing prompt flags for AI coding assistants
//!
//! Users end a prompt with short flags such as `-c` or `-t -d`. The flags
//! are stripped from the prompt and replaced by instructional context that
//! is handed to the assistant through its `UserPromptSubmit` hook.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates)
//! - [`engine`] - Parse -> Validate -> Build handlers -> Execute pipeline
//! - [`handlers`] - Per-flag content generators and their registry
//! - [`core`] - Flag types, parser, validator, configuration
//! - [`ui`] - User-facing output and hook/preview rendering
//!
//! # Correctness Invariants
//!
//! 1. Only a trailing run of `-x` tokens is ever treated as flags
//! 2. One unknown or disabled flag leaves the whole prompt untouched
//! 3. Context fragments appear in flag order, and empty ones are omitted
//! 4. Subagent context appears only in plan mode
//!
//! # Example
//!
//! ```
//! use ai_flags::core::config::FlagsConfig;
//! use ai_flags::engine::process_prompt;
//! use ai_flags::ui::render::format_hook_output;
//!
//! let outcome = process_prompt("fix the flaky test -d -t", &FlagsConfig::default(), None);
//! let augmentation = outcome.augmentation().unwrap();
//! let payload = format_hook_output(
//!     &augmentation.clean_prompt,
//!     &augmentation.flags,
//!     &augmentation.context,
//! )
//! .unwrap();
//! assert!(payload.contains("UserPromptSubmit"));
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod handlers;
pub mod ui;
