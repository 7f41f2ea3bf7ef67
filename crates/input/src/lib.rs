//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key
//! press is one discrete trigger; the engine has no notion of held keys, so
//! terminal auto-repeat is treated as more presses.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
