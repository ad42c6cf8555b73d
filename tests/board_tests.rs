//! Board tests - grid access, collision, and line clearing

use blockfall::core::{clear_lines, is_valid_position, Board, Shape, Tetromino};
use blockfall::types::{PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    // All cells should be empty
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_valid(5, 10));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, PieceKind::T);
    assert!(board.is_row_full(5));

    // Leave one cell empty in row 6
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(PieceKind::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
}

#[test]
fn test_valid_position_bounds() {
    let board = Board::new();
    let t = Tetromino::spawn(PieceKind::T);

    // T bitmap 010/111/000: filled columns 0..=2, rows 0..=1
    assert!(is_valid_position(&board, &t, Position::new(0, 0)));
    assert!(is_valid_position(&board, &t, Position::new(7, 0)));
    assert!(!is_valid_position(&board, &t, Position::new(-1, 0)));
    assert!(!is_valid_position(&board, &t, Position::new(8, 0)));
    assert!(is_valid_position(&board, &t, Position::new(4, 18)));
    assert!(!is_valid_position(&board, &t, Position::new(4, 19)));
    // Above the top edge is fine
    assert!(is_valid_position(&board, &t, Position::new(4, -1)));
    assert!(is_valid_position(&board, &t, Position::new(4, -10)));
}

#[test]
fn test_valid_position_collision_only_on_filled_bitmap_cells() {
    let mut board = Board::new();
    let t = Tetromino::spawn(PieceKind::T);

    // (4, 0) sits under the empty top-left corner of the T bitmap at (4, 0)
    board.set(4, 0, Some(PieceKind::Z));
    assert!(is_valid_position(&board, &t, Position::new(4, 0)));

    board.set(5, 0, Some(PieceKind::Z));
    assert!(!is_valid_position(&board, &t, Position::new(4, 0)));
}

#[test]
fn test_valid_position_ignores_cells_above_top_when_checking_collisions() {
    let mut board = Board::new();
    fill_row(&mut board, 1, PieceKind::J);
    let o = Shape::canonical(PieceKind::O);

    // Bottom half of the O at row 0, top half above the board
    assert!(board.fits(&o, Position::new(0, -1)));
    assert!(!board.fits(&o, Position::new(0, 0)));
}

#[test]
fn test_clear_lines_single_row() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::O);
    board.set(0, 18, Some(PieceKind::T));

    let result = clear_lines(&board);
    assert_eq!(result.lines_cleared(), 1);
    assert_eq!(result.board.get(0, 19), Some(Some(PieceKind::T)));
    assert!(result.board.is_row_empty(18));
    assert_eq!(result.board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_clear_lines_multiple_rows_order() {
    let mut board = Board::new();

    fill_row(&mut board, 5, PieceKind::T);
    fill_row(&mut board, 10, PieceKind::I);
    fill_row(&mut board, 15, PieceKind::O);

    // Marker pieces above each
    board.set(0, 4, Some(PieceKind::J));
    board.set(0, 9, Some(PieceKind::L));
    board.set(0, 14, Some(PieceKind::S));

    let result = clear_lines(&board);
    assert_eq!(result.lines_cleared(), 3);
    assert_eq!(result.cleared_rows.as_slice(), &[15, 10, 5]);

    let board = result.board;
    // Each marker drops by the number of full rows below it
    assert_eq!(board.get(0, 7), Some(Some(PieceKind::J)));
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 15), Some(Some(PieceKind::S)));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn test_clear_lines_nothing_full() {
    let mut board = Board::new();
    board.set(3, 19, Some(PieceKind::Z));

    let result = clear_lines(&board);
    assert_eq!(result.lines_cleared(), 0);
    assert_eq!(result.board, board);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 5, PieceKind::T);

    board.clear();

    assert_eq!(board, Board::new());
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_cells_reference() {
    let board = Board::new();
    assert_eq!(board.cells().len(), BOARD_WIDTH as usize * BOARD_HEIGHT as usize);
    assert!(board.rows().all(|row| row.len() == BOARD_WIDTH as usize));
}
