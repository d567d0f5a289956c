//! handlers
//!
//! Content generators for individual flags.
//!
//! # Architecture
//!
//! Every flag maps to one [`FlagHandler`]. A handler knows its letter, the
//! XML tag its content is wrapped in, and how to produce that content for a
//! given permission mode. Handlers are pure: the same inputs always yield
//! the same output.
//!
//! A [`HandlerRegistry`] maps letters to handlers. It is built fresh for each
//! invocation from a configuration snapshot, with custom content baked in,
//! and is read-only afterwards.
//!
//! # Example
//!
//! ```
//! use ai_flags::core::config::FlagsConfig;
//! use ai_flags::handlers::HandlerRegistry;
//!
//! let mut config = FlagsConfig::default();
//! config.commit.content = Some("Commit with a conventional message.".to_string());
//!
//! let registry = HandlerRegistry::from_settings(&config);
//! let commit = registry.get("c").unwrap();
//! assert_eq!(commit.xml_tag(), "commit_instructions");
//! assert_eq!(commit.content(None), "Commit with a conventional message.");
//! ```

pub mod builtin;
pub mod defaults;

pub use builtin::{
    builtin_handler, CommitHandler, DebugHandler, NoLintHandler, SubagentHandler, TestHandler,
};

use std::collections::HashMap;
use std::fmt;

use crate::core::config::FlagSettings;
use crate::core::flag::Flag;

/// Produces the instructional content for one flag.
pub trait FlagHandler: fmt::Debug + Send + Sync {
    /// Single-letter identity of the flag.
    fn flag_letter(&self) -> &str;

    /// Tag name (without angle brackets) that wraps this handler's content.
    fn xml_tag(&self) -> &str;

    /// Content for the given permission mode, unwrapped.
    ///
    /// An empty string means the flag contributes nothing in this mode.
    fn content(&self, permission_mode: Option<&str>) -> String;
}

/// Letter-to-handler lookup for one invocation.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn FlagHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the built-in handlers for every recognized flag.
    ///
    /// Disabled flags are registered too; enablement is the validator's
    /// concern, not the registry's.
    pub fn from_settings(settings: &impl FlagSettings) -> Self {
        let mut registry = Self::new();
        for flag in Flag::ALL {
            let custom = settings
                .flag_config(flag.letter())
                .and_then(|config| config.custom_content())
                .map(str::to_string);
            registry.register(builtin_handler(flag, custom));
        }
        registry
    }

    /// Add a handler under its own letter, replacing any previous one.
    pub fn register(&mut self, handler: Box<dyn FlagHandler>) {
        self.handlers
            .insert(handler.flag_letter().to_string(), handler);
    }

    /// Handler for a letter, if registered.
    pub fn get(&self, letter: &str) -> Option<&dyn FlagHandler> {
        self.handlers.get(letter).map(|handler| handler.as_ref())
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
