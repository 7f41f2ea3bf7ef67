//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Snapshots are
//! drawn into a plain framebuffer which is then flushed to the terminal
//! backend; no widget toolkit involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Map cell tags to colors through a configurable [`Palette`]
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::Palette;
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
