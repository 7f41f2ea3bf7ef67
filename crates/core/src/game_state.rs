//! Game state module - one board, one controller, one episode.
//!
//! `GameState` owns the [`Board`] and the [`PieceController`] and lends the
//! board to the controller on every call. It adds the pieces of lifecycle the
//! engine itself does not care about: start, pause, restart, game over, and
//! the snapshot consumed by renderers.

use log::info;

use crate::board::Board;
use crate::controller::{Piece, PieceController, TickOutcome};
use crate::rng::{PieceSource, UniformPieces};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    board: Board,
    controller: PieceController<S>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Pieces spawned in the current episode.
    piece_id: u32,
    /// Rows cleared in the current episode.
    lines: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState<UniformPieces> {
    /// Create a new game drawing pieces uniformly from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformPieces::new(seed))
    }
}

impl Default for GameState<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            controller: PieceController::new(source),
            episode_id: 0,
            piece_id: 0,
            lines: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<&Piece> {
        self.controller.active()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for staging positions (tests, replays).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece without validation (tests, replays).
    pub fn set_active(&mut self, piece: Option<Piece>) {
        self.controller.set_active(piece);
    }

    fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    fn spawn_piece(&mut self) -> bool {
        if self.controller.spawn(&self.board).is_none() {
            self.game_over = true;
            return false;
        }
        self.piece_id = self.piece_id.wrapping_add(1);
        true
    }

    /// Gravity step. See [`PieceController::tick`].
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playable() {
            return TickOutcome::Idle;
        }

        let outcome = self.controller.tick(&mut self.board);
        self.lines = self.lines.wrapping_add(outcome.lines_cleared() as u32);
        match outcome {
            TickOutcome::Locked { .. } => {
                self.piece_id = self.piece_id.wrapping_add(1);
            }
            TickOutcome::ToppedOut { .. } => {
                self.game_over = true;
                info!(
                    "game over after {} pieces, {} lines",
                    self.piece_id, self.lines
                );
            }
            TickOutcome::Fell | TickOutcome::Idle => {}
        }
        outcome
    }

    pub fn move_left(&mut self) -> bool {
        self.playable() && self.controller.move_horizontal(&self.board, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.playable() && self.controller.move_horizontal(&self.board, 1)
    }

    /// Same as a gravity tick.
    pub fn soft_drop(&mut self) -> TickOutcome {
        self.tick()
    }

    pub fn rotate(&mut self) -> bool {
        self.playable() && self.controller.rotate(&self.board)
    }

    /// Toggle pause. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
    }

    /// Clear the board and begin a new episode.
    ///
    /// The piece source keeps its position, so a restarted game continues the
    /// seeded sequence rather than replaying it.
    pub fn restart(&mut self) {
        self.board.clear();
        self.controller.set_active(None);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.piece_id = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        info!("restart: episode {}", self.episode_id);
        self.spawn_piece();
    }

    /// Apply a game action; returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => !matches!(self.soft_drop(), TickOutcome::Idle),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                let before = self.paused;
                self.toggle_pause();
                before != self.paused
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_tag_grid(&mut out.board);
        out.active = self.controller.active().copied().map(ActiveSnapshot::from);
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.seed = self.controller.source().seed();
        out.piece_id = self.piece_id;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
