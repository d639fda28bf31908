//! Pieces module - tetromino catalog and rotation transform
//!
//! Every shape is stored once, in its spawn (North) orientation, on a 4x4
//! grid anchored at the top-left. Other orientations are derived on demand by
//! transforming the canonical grid and re-anchoring it to the top-left of its
//! bounding box, so position tracking only ever needs the box corner.
//!
//! Cell values double as palette slots: three shapes use slot 1, two use
//! slot 2 and two use slot 3, which keeps the board to three colours that
//! change together on every level up.

use crate::types::{Cell, PieceKind, Rotation, EMPTY};

/// Side of the square grid a piece lives on.
pub const GRID: usize = 4;

/// A piece grid, indexed `[row][col]`.
pub type PieceGrid = [[Cell; GRID]; GRID];

const SHAPES: [PieceGrid; 7] = [
    // O
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // J
    [[2, 2, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]],
    // L
    [[3, 3, 0, 0], [0, 3, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0]],
    // Z
    [[0, 2, 0, 0], [2, 2, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]],
    // S
    [[3, 0, 0, 0], [3, 3, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0]],
    // T
    [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    // I
    [[1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0]],
];

/// Canonical (North) grid for a piece kind. Always a fresh copy.
pub fn shape_grid(kind: PieceKind) -> PieceGrid {
    SHAPES[kind.index()]
}

/// A piece grid in one orientation together with its tight bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub grid: PieceGrid,
    pub width: u8,
    pub height: u8,
}

impl Shape {
    /// Occupied cells as `(row, col, value)` relative to the box corner.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &v)| v != EMPTY)
                .map(move |(j, &v)| (i as i8, j as i8, v))
        })
    }
}

/// Compute the grid and bounding box of `kind` in `rotation`.
pub fn oriented_shape(kind: PieceKind, rotation: Rotation) -> Shape {
    let src = shape_grid(kind);
    let mut grid = [[EMPTY; GRID]; GRID];

    // (i, j) = source (row, col); (x, y) = destination (col, row)
    for (i, src_row) in src.iter().enumerate() {
        for (j, &value) in src_row.iter().enumerate() {
            let (x, y) = match rotation {
                Rotation::North => (j, i),
                Rotation::East => (3 - i, j),
                Rotation::South => (3 - j, 3 - i),
                Rotation::West => (i, 3 - j),
            };
            grid[y][x] = value;
        }
    }

    normalize(&mut grid);

    Shape {
        grid,
        width: extent(|k| column_empty(&grid, k)),
        height: extent(|k| row_empty(&grid, k)),
    }
}

fn column_empty(grid: &PieceGrid, col: usize) -> bool {
    grid.iter().all(|row| row[col] == EMPTY)
}

fn row_empty(grid: &PieceGrid, row: usize) -> bool {
    grid[row].iter().all(|&c| c == EMPTY)
}

/// Shift left while column 0 is empty, then up while row 0 is empty.
fn normalize(grid: &mut PieceGrid) {
    for _ in 0..GRID - 1 {
        if !column_empty(grid, 0) {
            break;
        }
        for row in grid.iter_mut() {
            row.rotate_left(1);
            row[GRID - 1] = EMPTY;
        }
    }

    for _ in 0..GRID - 1 {
        if !row_empty(grid, 0) {
            break;
        }
        grid.rotate_left(1);
        grid[GRID - 1] = [EMPTY; GRID];
    }
}

/// Index of the last non-empty line + 1, scanning from the far edge.
fn extent(is_empty: impl Fn(usize) -> bool) -> u8 {
    (0..GRID)
        .rev()
        .find(|&k| !is_empty(k))
        .map_or(0, |k| k as u8 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_matches_catalog() {
        for kind in PieceKind::ALL {
            assert_eq!(oriented_shape(kind, Rotation::North).grid, shape_grid(kind));
        }
    }

    #[test]
    fn every_orientation_is_top_left_anchored() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let shape = oriented_shape(kind, Rotation::from_index(r));
                assert!(!column_empty(&shape.grid, 0), "{kind:?} r{r}");
                assert!(!row_empty(&shape.grid, 0), "{kind:?} r{r}");
                assert_eq!(shape.cells().count(), 4);
            }
        }
    }

    #[test]
    fn cells_report_palette_value() {
        let shape = oriented_shape(PieceKind::L, Rotation::North);
        assert!(shape.cells().all(|(_, _, v)| v == 3));
    }
}
