//! Shapes module - piece matrices and rotation
//!
//! A shape is a small rectangular boolean matrix (at most 4x4) marking the
//! occupied cells of a piece's bounding box. Shapes are `Copy` values:
//! rotating produces a new matrix with swapped dimensions and leaves the
//! original untouched. There is no rotation-state table and no wall kicks;
//! the matrix itself is the orientation.

use crate::types::PieceKind;

/// Largest bounding box side of any shape.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single occupied cell relative to the bounding box's top-left
pub type CellOffset = (i8, i8);

/// Occupancy matrix of a piece in one orientation.
///
/// Cells outside `width x height` are always `false`, so derived equality
/// compares exactly the visible matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

const fn matrix<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut y = 0;
    while y < H {
        let mut x = 0;
        while x < W {
            cells[y][x] = rows[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    Shape {
        width: W as u8,
        height: H as u8,
        cells,
    }
}

const I_SHAPE: Shape = matrix([[1, 1, 1, 1]]);
const T_SHAPE: Shape = matrix([[1, 1, 1], [0, 1, 0]]);
const L_SHAPE: Shape = matrix([[1, 1, 1], [1, 0, 0]]);
const J_SHAPE: Shape = matrix([[1, 1, 1], [0, 0, 1]]);
const O_SHAPE: Shape = matrix([[1, 1], [1, 1]]);
const S_SHAPE: Shape = matrix([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = matrix([[1, 1, 0], [0, 1, 1]]);

impl Shape {
    /// Initial orientation for a piece kind.
    pub fn spawn(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => I_SHAPE,
            PieceKind::T => T_SHAPE,
            PieceKind::L => L_SHAPE,
            PieceKind::J => J_SHAPE,
            PieceKind::O => O_SHAPE,
            PieceKind::S => S_SHAPE,
            PieceKind::Z => Z_SHAPE,
        }
    }

    /// Build a shape from rows of `0`/`1` values, top row first.
    ///
    /// Returns `None` for empty input, ragged rows, or a side longer than
    /// [`MAX_SHAPE_DIM`].
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let bar = Shape::from_rows(&[&[1, 1, 1]]).unwrap();
    /// assert_eq!((bar.width(), bar.height()), (3, 1));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_DIM || height > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at `(x, y)` is occupied. Out of range is `false`.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Occupied offsets in row-major order.
    pub fn offsets(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.offsets().count()
    }

    /// Rotate 90° clockwise: transpose, then reverse each new row.
    ///
    /// Row `i` of the result is column `i` of `self` read bottom to top, so a
    /// `w x h` matrix becomes `h x w`.
    pub fn rotated(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Render as `#`/`.` rows, mainly for test diagnostics.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.is_filled(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::spawn(kind).cell_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let t = Shape::spawn(PieceKind::T);
        let r = t.rotated();
        assert_eq!((r.width(), r.height()), (t.height(), t.width()));
    }

    #[test]
    fn rotated_t_points_left() {
        let r = Shape::spawn(PieceKind::T).rotated();
        assert_eq!(r.to_rows(), vec![".#", "##", ".#"]);
    }

    #[test]
    fn offsets_are_row_major() {
        let offsets: Vec<_> = Shape::spawn(PieceKind::S).offsets().collect();
        assert_eq!(offsets, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn from_rows_rejects_oversized() {
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
    }
}
