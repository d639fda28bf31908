//! Pieces tests - catalog, rotation transform and rotation commit/reject

use blocktris::core::pieces::{oriented_shape, shape_grid, GRID};
use blocktris::core::{ActivePiece, Board};
use blocktris::types::{PieceKind, Rotation, Turn, BOARD_WIDTH};

// ============== Catalog ==============

#[test]
fn test_catalog_cell_values() {
    let expected = [
        (PieceKind::O, 1),
        (PieceKind::J, 2),
        (PieceKind::L, 3),
        (PieceKind::Z, 2),
        (PieceKind::S, 3),
        (PieceKind::T, 1),
        (PieceKind::I, 1),
    ];
    for (kind, value) in expected {
        let grid = shape_grid(kind);
        let cells: Vec<u8> = grid.iter().flatten().copied().filter(|&c| c != 0).collect();
        assert_eq!(cells, vec![value; 4], "{kind:?}");
    }
}

#[test]
fn test_shape_grid_is_a_copy() {
    let mut grid = shape_grid(PieceKind::T);
    grid[0][0] = 3;
    assert_eq!(shape_grid(PieceKind::T)[0][0], 0);
}

// ============== Orientation ==============

#[test]
fn test_i_piece_orientations() {
    let north = oriented_shape(PieceKind::I, Rotation::North);
    assert_eq!((north.width, north.height), (1, 4));

    let east = oriented_shape(PieceKind::I, Rotation::East);
    assert_eq!((east.width, east.height), (4, 1));
    assert_eq!(east.grid[0], [1, 1, 1, 1]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let north = oriented_shape(PieceKind::O, Rotation::North);
    for r in 1..4 {
        assert_eq!(oriented_shape(PieceKind::O, Rotation::from_index(r)), north);
    }
}

#[test]
fn test_t_piece_east() {
    // North: .X / XX / .X  ->  East: .X. / XXX
    let east = oriented_shape(PieceKind::T, Rotation::East);
    assert_eq!((east.width, east.height), (3, 2));
    assert_eq!(east.grid[0], [0, 1, 0, 0]);
    assert_eq!(east.grid[1], [1, 1, 1, 0]);
}

#[test]
fn test_four_turns_return_to_start() {
    for kind in PieceKind::ALL {
        for start in 0..4 {
            let mut rotation = Rotation::from_index(start);
            let shape = oriented_shape(kind, rotation);
            for _ in 0..4 {
                rotation = rotation.turned(Turn::Cw);
            }
            assert_eq!(oriented_shape(kind, rotation), shape);
        }
    }
}

#[test]
fn test_extent_matches_cells() {
    for kind in PieceKind::ALL {
        for r in 0..4 {
            let shape = oriented_shape(kind, Rotation::from_index(r));
            let max_col = shape.cells().map(|(_, j, _)| j).max().unwrap();
            let max_row = shape.cells().map(|(i, _, _)| i).max().unwrap();
            assert_eq!(shape.width as i8, max_col + 1);
            assert_eq!(shape.height as i8, max_row + 1);
            assert!(shape.width as usize <= GRID && shape.height as usize <= GRID);
        }
    }
}

#[test]
fn test_quarter_turn_swaps_extent() {
    for kind in PieceKind::ALL {
        let north = oriented_shape(kind, Rotation::North);
        let east = oriented_shape(kind, Rotation::East);
        assert_eq!((north.width, north.height), (east.height, east.width));
    }
}

// ============== Active piece rotation ==============

#[test]
fn test_rotate_commits_on_open_board() {
    let board = Board::new();
    let mut piece = ActivePiece::spawn(PieceKind::T);
    assert!(piece.rotate(Turn::Cw, &board));
    assert_eq!(piece.rotation, Rotation::East);
    assert!(piece.rotate(Turn::Ccw, &board));
    assert_eq!(piece.rotation, Rotation::North);
}

#[test]
fn test_rotate_rejected_by_stack_leaves_piece_unchanged() {
    let mut board = Board::new();
    // T East needs (11, 6), which the North T leaves free.
    board.set(11, 6, 2);
    let mut piece = ActivePiece::placed(PieceKind::T, Rotation::North, 10, 4);
    let before = piece;

    assert!(!piece.rotate(Turn::Cw, &board));
    assert_eq!(piece, before);
}

#[test]
fn test_rotate_stay_never_rejects() {
    let mut board = Board::new();
    let mut piece = ActivePiece::placed(PieceKind::S, Rotation::North, 5, 2);
    for (row, col, _) in piece.cells().collect::<Vec<_>>() {
        board.set(row, col, 1);
    }
    let before = piece;
    assert!(piece.rotate(Turn::Stay, &board));
    assert_eq!(piece.rotation, before.rotation);
    assert_eq!(piece.col, before.col);
    assert_eq!(piece, before);
}

#[test]
fn test_four_cw_rotations_restore_active_piece() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for col in [0, 3, 6] {
            let start = ActivePiece::placed(kind, Rotation::North, 6, col);
            let mut piece = start;
            for _ in 0..4 {
                assert!(piece.rotate(Turn::Cw, &board), "{kind:?} col {col}");
            }
            assert_eq!(piece, start, "{kind:?} col {col}");
            assert_eq!((piece.width(), piece.height()), (start.width(), start.height()));
        }
    }
}

#[test]
fn test_column_always_inside_board_after_rotation() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for col in 0..BOARD_WIDTH as i8 {
            let mut piece = ActivePiece::placed(kind, Rotation::North, 4, col);
            for _ in 0..4 {
                piece.rotate(Turn::Cw, &board);
                assert!(piece.col >= 0 && piece.col <= piece.max_col(), "{kind:?}");
            }
        }
    }
}

#[test]
fn test_spawn_positions() {
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind);
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, (BOARD_WIDTH as i8 - piece.width() as i8) / 2);
    }
    assert_eq!(ActivePiece::spawn(PieceKind::J).col, 4);
    assert_eq!(ActivePiece::spawn(PieceKind::I).height(), 1);
}

#[test]
fn test_cw_then_ccw_restores_piece() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for col in [0, 3, 6] {
            let start = ActivePiece::placed(kind, Rotation::North, 6, col);
            let mut piece = start;
            assert!(piece.rotate(Turn::Cw, &board));
            assert!(piece.rotate(Turn::Ccw, &board));
            assert_eq!(piece, start, "{kind:?} col {col}");
        }
    }
}
