//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole simulation: the grid store, piece shapes, the
//! piece controller, and the session that drives it with gravity. It has
//! **no dependencies** on terminals, files or clocks; time arrives as elapsed
//! milliseconds and randomness as an injected [`PieceSource`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid store with collision checks, merge and row clearing
//! - [`shape`]: piece matrices and clockwise rotation
//! - [`controller`]: the falling piece: spawn, move, rotate, lock
//! - [`game_state`]: board + controller + pause/restart/game-over lifecycle
//! - [`rng`]: seedable piece sources
//! - [`snapshot`]: read-only state for renderers
//! - [`timer`]: gravity accumulator
//! - [`session`]: owns a game and its timer; the single entry point for events
//!
//! # Rules
//!
//! - Pieces spawn at (4, 0) and fall one row per gravity tick.
//! - A piece that cannot fall locks into the grid; every full row is then
//!   cleared at once and a new piece spawns.
//! - Rotation is a plain 90° clockwise matrix turn with no wall kicks.
//! - The game ends when a new piece does not fit at the spawn position.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SequencePieces, TickOutcome};
//! use blockfall_core::types::{GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(SequencePieces::repeat(PieceKind::O));
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! assert_eq!(game.active().unwrap().x, 5);
//!
//! // Drop until it locks at the bottom.
//! while game.tick() == TickOutcome::Fell {}
//! assert_eq!(game.board().filled_count(), 4);
//! ```

pub mod board;
pub mod controller;
pub mod game_state;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;
pub mod timer;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, TagGrid};
pub use controller::{Piece, PieceController, TickOutcome};
pub use game_state::GameState;
pub use rng::{PieceSource, SequencePieces, SimpleRng, UniformPieces};
pub use session::Session;
pub use shape::{Shape, MAX_SHAPE_DIM};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::GravityTimer;
