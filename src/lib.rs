//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input, and terminal crates under short module
//! names, and hosts the binary's environment configuration and file logging.

pub mod config;
pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
