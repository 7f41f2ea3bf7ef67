use crate::board::{translate, TagGrid};
use crate::controller::Piece;
use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_TAG};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// In-bounds board coordinates covered by the piece.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.offsets().filter_map(move |(dx, dy)| {
            let (x, y) = translate(self.x, self.y, dx, dy)?;
            let in_bounds =
                (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y);
            in_bounds.then_some((x as usize, y as usize))
        })
    }
}

/// Read-only copy of everything a renderer needs.
///
/// `board` holds locked cells only; use [`GameSnapshot::overlaid`] for the
/// view with the falling piece drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: TagGrid,
    pub active: Option<ActiveSnapshot>,
    pub paused: bool,
    pub game_over: bool,
    pub seed: Option<u32>,
    pub piece_id: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[EMPTY_TAG; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.paused = false;
        self.game_over = false;
        self.seed = None;
        self.piece_id = 0;
        self.lines = 0;
    }

    /// Locked cells with the active piece drawn on top.
    pub fn overlaid(&self) -> TagGrid {
        let mut grid = self.board;
        if let Some(active) = &self.active {
            let tag = active.kind.tag();
            for (x, y) in active.cells() {
                grid[y][x] = tag;
            }
        }
        grid
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY_TAG; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            paused: false,
            game_over: false,
            seed: None,
            piece_id: 0,
            lines: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_draws_active_without_touching_board() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = PieceKind::I.tag();
        snap.active = Some(Piece::spawn(PieceKind::O).into());

        let grid = snap.overlaid();
        assert_eq!(grid[0][4], PieceKind::O.tag());
        assert_eq!(grid[1][5], PieceKind::O.tag());
        assert_eq!(grid[19][0], PieceKind::I.tag());
        assert_eq!(snap.board[0][4], EMPTY_TAG);
    }

    #[test]
    fn active_cells_skip_out_of_bounds() {
        let active: ActiveSnapshot = Piece::at(PieceKind::I, 8, 0).into();
        assert_eq!(active.cells().count(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = GameSnapshot::default();
        snap.board[3][3] = 2;
        snap.game_over = true;
        snap.lines = 9;
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
