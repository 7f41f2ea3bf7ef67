//! Piece controller - owns the falling piece and mediates every change to it.
//!
//! The controller never holds the board. Callers pass the [`Board`] in by
//! reference on each call, and every candidate position or rotation is checked
//! with [`Board::fits`] before it is committed. A blocked downward step locks
//! the piece: merge, clear full rows, spawn the next piece. All operations are
//! total; a rejected move just returns `false`.

use log::{debug, info, warn};

use crate::board::{translate, Board};
use crate::rng::{PieceSource, UniformPieces};
use crate::shape::Shape;
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece of `kind` in its initial orientation at the spawn position.
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// A piece of `kind` in its initial orientation at `(x, y)`.
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: Shape::spawn(kind),
            x,
            y,
        }
    }

    /// Absolute board coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape.offsets().map(move |(dx, dy)| {
            (self.x.saturating_add(dx), self.y.saturating_add(dy))
        })
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }
}

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked and a new piece spawned.
    Locked { lines_cleared: usize },
    /// The piece locked but the next piece did not fit at spawn.
    ToppedOut { lines_cleared: usize },
    /// No active piece; nothing happened.
    Idle,
}

impl TickOutcome {
    pub fn locked(&self) -> bool {
        matches!(
            self,
            TickOutcome::Locked { .. } | TickOutcome::ToppedOut { .. }
        )
    }

    pub fn lines_cleared(&self) -> usize {
        match *self {
            TickOutcome::Locked { lines_cleared } | TickOutcome::ToppedOut { lines_cleared } => {
                lines_cleared
            }
            TickOutcome::Fell | TickOutcome::Idle => 0,
        }
    }
}

/// Falling-piece lifecycle: spawn, move, rotate, lock.
#[derive(Debug, Clone)]
pub struct PieceController<S = UniformPieces> {
    active: Option<Piece>,
    source: S,
    spawned: u32,
}

impl<S: PieceSource> PieceController<S> {
    /// A controller with no active piece; call [`PieceController::spawn`].
    pub fn new(source: S) -> Self {
        Self {
            active: None,
            source,
            spawned: 0,
        }
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Number of pieces successfully spawned.
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Replace the active piece without validation (staging and replays).
    pub fn set_active(&mut self, piece: Option<Piece>) {
        self.active = piece;
    }

    /// Draw the next kind and place it at the spawn position.
    ///
    /// If it does not fit the board has topped out: no piece is placed, the
    /// active slot is left empty and `None` is returned.
    pub fn spawn(&mut self, board: &Board) -> Option<Piece> {
        let piece = Piece::spawn(self.source.next_kind());
        if !piece.fits(board) {
            warn!(
                "spawn of {:?} at ({}, {}) is blocked; topping out",
                piece.kind, piece.x, piece.y
            );
            self.active = None;
            return None;
        }

        self.spawned = self.spawned.wrapping_add(1);
        self.active = Some(piece);
        Some(piece)
    }

    /// Shift the active piece by `(dx, dy)` if every cell lands on an empty
    /// in-bounds cell. State is unchanged on failure, including offsets too
    /// large to represent.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let Some((x, y)) = translate(active.x, active.y, dx, dy) else {
            return false;
        };
        if !board.fits(&active.shape, x, y) {
            return false;
        }

        self.active = Some(Piece { x, y, ..active });
        true
    }

    /// Left/right input; `dx` is -1 or +1.
    pub fn move_horizontal(&mut self, board: &Board, dx: i8) -> bool {
        self.try_move(board, dx, 0)
    }

    /// Rotate clockwise in place. No kicks: if the rotated matrix does not fit
    /// at the current position the rotation is discarded.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let shape = active.shape.rotated();
        if !board.fits(&shape, active.x, active.y) {
            return false;
        }

        self.active = Some(Piece { shape, ..active });
        true
    }

    /// One gravity step: fall one row, or lock and respawn when blocked.
    pub fn tick(&mut self, board: &mut Board) -> TickOutcome {
        if self.active.is_none() {
            return TickOutcome::Idle;
        }
        if self.try_move(board, 0, 1) {
            return TickOutcome::Fell;
        }

        let lines_cleared = self.lock(board);
        match self.spawn(board) {
            Some(_) => TickOutcome::Locked { lines_cleared },
            None => TickOutcome::ToppedOut { lines_cleared },
        }
    }

    /// Merge the active piece into the board and clear full rows.
    /// Returns the number of rows cleared.
    fn lock(&mut self, board: &mut Board) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };

        board.merge(&piece.shape, piece.x, piece.y, piece.kind);
        debug!("locked {:?} at ({}, {})", piece.kind, piece.x, piece.y);

        let cleared = board.clear_full_rows();
        if !cleared.is_empty() {
            info!("cleared {} row(s): {:?}", cleared.len(), cleared.as_slice());
        }
        cleared.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequencePieces;

    fn controller(kind: PieceKind) -> PieceController<SequencePieces> {
        PieceController::new(SequencePieces::repeat(kind))
    }

    #[test]
    fn test_spawn_places_piece_at_spawn_point() {
        let board = Board::new();
        let mut ctl = controller(PieceKind::T);

        let piece = ctl.spawn(&board).unwrap();
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.shape, Shape::spawn(PieceKind::T));
        assert_eq!(ctl.spawned(), 1);
    }

    #[test]
    fn test_spawn_blocked_tops_out() {
        let mut board = Board::new();
        board.set(SPAWN_X, SPAWN_Y, Some(PieceKind::I));
        let mut ctl = controller(PieceKind::O);

        assert!(ctl.spawn(&board).is_none());
        assert!(ctl.active().is_none());
        assert_eq!(ctl.spawned(), 0);
        // The blocked region is untouched.
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_try_move_without_piece() {
        let board = Board::new();
        let mut ctl = controller(PieceKind::O);
        assert!(!ctl.try_move(&board, 0, 1));
        assert!(!ctl.rotate(&board));
    }

    #[test]
    fn test_try_move_collision_leaves_state() {
        let mut board = Board::new();
        let mut ctl = controller(PieceKind::O);
        ctl.spawn(&board);
        board.set(4, 2, Some(PieceKind::I));

        let before = *ctl.active().unwrap();
        assert!(!ctl.try_move(&board, 0, 1));
        assert_eq!(*ctl.active().unwrap(), before);
    }

    #[test]
    fn test_try_move_extreme_offsets_rejected() {
        let board = Board::new();
        let mut ctl = controller(PieceKind::O);
        ctl.spawn(&board);
        let before = *ctl.active().unwrap();

        for (dx, dy) in [(i8::MAX, 0), (i8::MIN, 0), (0, i8::MAX), (0, i8::MIN)] {
            assert!(!ctl.try_move(&board, dx, dy), "({}, {})", dx, dy);
        }
        assert_eq!(*ctl.active().unwrap(), before);
    }

    #[test]
    fn test_rotate_blocked_is_noop() {
        let mut board = Board::new();
        let mut ctl = controller(PieceKind::I);
        ctl.spawn(&board);
        // Vertical I at (4, 0) needs (4, 1).
        board.set(4, 1, Some(PieceKind::O));

        let before = *ctl.active().unwrap();
        assert!(!ctl.rotate(&board));
        assert_eq!(*ctl.active().unwrap(), before);
    }

    #[test]
    fn test_tick_falls_then_locks() {
        let mut board = Board::new();
        let mut ctl = controller(PieceKind::O);
        ctl.spawn(&board);

        for _ in 0..18 {
            assert_eq!(ctl.tick(&mut board), TickOutcome::Fell);
        }
        assert_eq!(ctl.tick(&mut board), TickOutcome::Locked { lines_cleared: 0 });
        assert_eq!(board.filled_count(), 4);
        assert_eq!(ctl.spawned(), 2);
    }

    #[test]
    fn test_tick_idle_without_piece() {
        let mut board = Board::new();
        let mut ctl = controller(PieceKind::O);
        assert_eq!(ctl.tick(&mut board), TickOutcome::Idle);
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(TickOutcome::Locked { lines_cleared: 2 }.locked());
        assert!(TickOutcome::ToppedOut { lines_cleared: 0 }.locked());
        assert!(!TickOutcome::Fell.locked());
        assert_eq!(TickOutcome::Locked { lines_cleared: 2 }.lines_cleared(), 2);
        assert_eq!(TickOutcome::Idle.lines_cleared(), 0);
    }
}
