//! Piece tests - canonical bitmaps, rotation, and spawn placement

use blockfall::core::{Shape, Tetromino};
use blockfall::types::{PieceKind, Position};

fn filled(shape: &Shape) -> Vec<(i8, i8)> {
    shape.cells().collect()
}

#[test]
fn test_canonical_bitmaps() {
    assert_eq!(
        filled(&Shape::canonical(PieceKind::I)),
        vec![(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::O)),
        vec![(0, 0), (1, 0), (0, 1), (1, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::T)),
        vec![(1, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::S)),
        vec![(1, 0), (2, 0), (0, 1), (1, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::Z)),
        vec![(0, 0), (1, 0), (1, 1), (2, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::J)),
        vec![(0, 0), (0, 1), (1, 1), (2, 1)]
    );
    assert_eq!(
        filled(&Shape::canonical(PieceKind::L)),
        vec![(2, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn test_t_rotation_sequence() {
    let north = Shape::canonical(PieceKind::T);
    let east = north.rotated_cw();
    let south = east.rotated_cw();
    let west = south.rotated_cw();

    assert_eq!(east, Shape::from_rows([[0, 1, 0], [0, 1, 1], [0, 1, 0]]));
    assert_eq!(south, Shape::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]]));
    assert_eq!(west, Shape::from_rows([[0, 1, 0], [1, 1, 0], [0, 1, 0]]));
    assert_eq!(west.rotated_cw(), north);
}

#[test]
fn test_rotation_preserves_size_and_cell_count() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::canonical(kind);
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.size(), Shape::canonical(kind).size(), "{:?}", kind);
            assert_eq!(shape.cells().count(), 4, "{:?}", kind);
        }
        assert_eq!(shape, Shape::canonical(kind), "{:?}", kind);
    }
}

#[test]
fn test_i_piece_vertical_after_rotation() {
    let vertical = Shape::canonical(PieceKind::I).rotated_cw();
    assert_eq!(filled(&vertical), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_spawn_positions() {
    // x = 5 - floor(size / 2), y = 0
    let expected = [
        (PieceKind::I, 3),
        (PieceKind::O, 4),
        (PieceKind::T, 4),
        (PieceKind::S, 4),
        (PieceKind::Z, 4),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
    ];
    for (kind, x) in expected {
        let piece = Tetromino::spawn(kind);
        assert_eq!(piece.position, Position::new(x, 0), "{:?}", kind);
        assert_eq!(piece.shape, Shape::canonical(kind));
        assert_eq!(piece.color(), kind.color());
    }
}

#[test]
fn test_rotated_tetromino_keeps_position() {
    let piece = Tetromino::spawn(PieceKind::J).moved_to(Position::new(2, 7));
    let rotated = piece.rotated();
    assert_eq!(rotated.position, Position::new(2, 7));
    assert_eq!(rotated.kind, PieceKind::J);
    assert_eq!(rotated.shape, piece.shape.rotated_cw());
}

#[test]
fn test_shape_rows_trimmed_to_size() {
    let o = Shape::canonical(PieceKind::O);
    let rows: Vec<Vec<bool>> = o.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![true, true], vec![true, true]]);
}
