//! Board tests - grid store behavior through the public API

use blockfall::core::{Board, Shape};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_empty(x, y), "Cell ({}, {}) should be empty", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_out_of_bounds_is_never_empty() {
    let board = Board::new();
    assert!(!board.is_empty(-1, 0));
    assert!(!board.is_empty(0, -1));
    assert!(!board.is_empty(BOARD_WIDTH as i8, 0));
    assert!(!board.is_empty(0, BOARD_HEIGHT as i8));
    assert_eq!(board.get(-1, 0), None);
}

#[test]
fn test_fits_rejects_overlap_and_edges() {
    let mut board = Board::new();
    let o = Shape::spawn(PieceKind::O);

    assert!(board.fits(&o, 0, 0));
    assert!(board.fits(&o, 8, 18));
    assert!(!board.fits(&o, 9, 0), "right edge");
    assert!(!board.fits(&o, 0, 19), "floor");
    assert!(!board.fits(&o, -1, 0), "left edge");

    board.set(5, 5, Some(PieceKind::T));
    assert!(!board.fits(&o, 4, 4));
    assert!(board.fits(&o, 6, 4));
}

#[test]
fn test_merge_writes_piece_tag() {
    let mut board = Board::new();
    let t = Shape::spawn(PieceKind::T);

    assert_eq!(board.merge(&t, 3, 10, PieceKind::T), 4);
    assert_eq!(board.get(3, 10), Some(Some(PieceKind::T)));
    assert_eq!(board.get(4, 10), Some(Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert_eq!(board.get(4, 11), Some(Some(PieceKind::T)));
    assert_eq!(board.get(3, 11), Some(None));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_non_adjacent_rows_shifts_survivors() {
    let mut rows = [[0u8; 10]; 4];
    rows[0][2] = 3; // row 16: marker
    rows[1] = [1; 10]; // row 17: full
    rows[2][7] = 2; // row 18: marker
    rows[3] = [4; 10]; // row 19: full
    let mut board = Board::from_tag_rows(&rows).unwrap();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // Survivors keep their order and fall to the bottom.
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(2, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.filled_count(), 2);
    for y in 0..18 {
        assert!(!board.is_row_full(y));
    }
}

#[test]
fn test_clear_whole_board() {
    let rows = [[7u8; 10]; 20];
    let mut board = Board::from_tag_rows(&rows).unwrap();
    assert_eq!(board.clear_full_rows().len(), 20);
    assert_eq!(board, Board::new());
}

#[test]
fn test_from_tag_rows_rejects_unknown_tags() {
    assert!(Board::from_tag_rows(&[[9; 10]]).is_none());
    assert!(Board::from_tag_rows(&[[0; 10]; 21]).is_none());
}

#[test]
fn test_merge_filling_last_gap_clears_bottom_row() {
    let mut rows = [[0u8; 10]; 3];
    rows[0][1] = 6; // row 17 marker
    rows[2] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 0]; // row 19, gap at column 9
    let mut board = Board::from_tag_rows(&rows).unwrap();

    // J = [111/001]: its hook drops into the gap.
    let j = Shape::spawn(PieceKind::J);
    assert!(board.fits(&j, 7, 18));
    board.merge(&j, 7, 18, PieceKind::J);
    assert!(board.is_row_full(19));

    assert_eq!(board.clear_full_rows().as_slice(), &[19]);
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(9, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 19), Some(None));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::S)));
    assert!((0..10).all(|x| board.is_empty(x, 0)));
    assert_eq!(board.filled_count(), 4);
}
