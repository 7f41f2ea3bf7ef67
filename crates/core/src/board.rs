//! Board module - the grid store
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Storage is a flat array for cache locality and to
//! keep the hot paths allocation-free.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{cell_tag, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one [`Board::clear_full_rows`] call.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Grid of tags as exported to renderers and snapshots.
pub type TagGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// The committed (locked) board state.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// The collision primitive: true only for an in-bounds, empty cell.
    #[inline]
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True when every occupied offset of `shape`, translated by `(x, y)`,
    /// lands on an empty in-bounds cell. Translations that overflow `i8` are
    /// out of bounds.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .offsets()
            .all(|(dx, dy)| match translate(x, y, dx, dy) {
                Some((cx, cy)) => self.is_empty(cx, cy),
                None => false,
            })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Stamp `shape` at `(x, y)` with `kind`, in place.
    ///
    /// The region must already be legal (see [`Board::fits`]); the board
    /// trusts its caller and only asserts this in debug builds. Offsets that
    /// fall outside the grid are never written. Returns the number of cells
    /// written.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> usize {
        debug_assert!(
            self.fits(shape, x, y),
            "merge of {:?} at ({}, {}) overlaps locked cells or leaves the grid",
            kind,
            x,
            y
        );

        let mut written = 0;
        for (dx, dy) in shape.offsets() {
            let Some((cx, cy)) = translate(x, y, dx, dy) else {
                continue;
            };
            if self.set(cx, cy, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row at once and pad the top with empty rows.
    ///
    /// Surviving rows keep their relative order. Returns the removed row
    /// indices, bottom to top. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the grid as integer tags (`EMPTY_TAG` for empty cells).
    pub fn write_tag_grid(&self, out: &mut TagGrid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            for (dst, cell) in row.iter_mut().zip(&self.cells[start..start + width]) {
                *dst = cell_tag(*cell);
            }
        }
    }

    /// Count of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows of tags (`0` = empty), top row first.
    ///
    /// Missing rows at the top are left empty, so short inputs describe the
    /// bottom of the board. Returns `None` when there are too many rows, a row
    /// has the wrong width, or a tag is unknown.
    pub fn from_tag_rows(rows: &[[u8; BOARD_WIDTH as usize]]) -> Option<Self> {
        if rows.len() > BOARD_HEIGHT as usize {
            return None;
        }
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (i, row) in rows.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                let cell = match tag {
                    0 => None,
                    t => Some(PieceKind::from_tag(t)?),
                };
                board.cells[(top + i) * BOARD_WIDTH as usize + x] = cell;
            }
        }
        Some(board)
    }
}

/// `(x + dx, y + dy)`, or `None` on overflow.
#[inline]
pub(crate) fn translate(x: i8, y: i8, dx: i8, dy: i8) -> Option<(i8, i8)> {
    Some((x.checked_add(dx)?, y.checked_add(dy)?))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
