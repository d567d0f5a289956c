//! core
//!
//! Domain types and the pure parts of the flag pipeline.
//!
//! # Modules
//!
//! - [`flag`] - The closed flag set and permission-mode helpers
//! - [`parser`] - Trailing flag extraction
//! - [`validator`] - Recognized/enabled gate
//! - [`config`] - Per-flag configuration schema and persistence
//!
//! # Design Principles
//!
//! - Parsing and validation are pure and never fail; "no flags" and
//!   "bad flags" are ordinary values
//! - Configuration is a snapshot passed in, never global state

pub mod config;
pub mod flag;
pub mod parser;
pub mod validator;
