//! Board module - manages the game grid
//!
//! The board is a 20x10 grid of cell values (0 = empty, 1..=3 = palette slot).
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right).

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one [`Board::clear_full_rows`] call, top to bottom.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(c) if c != EMPTY)
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        self.row(row).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove one row: every row above shifts down by one and row 0 is cleared.
    pub fn clear_row(&mut self, row: usize) {
        if row >= HEIGHT {
            return;
        }

        // copy_within handles overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * WIDTH;
            self.cells.copy_within(src..src + WIDTH, r * WIDTH);
        }
        self.cells[..WIDTH].fill(EMPTY);
    }

    /// Clear all full rows, scanning top to bottom.
    ///
    /// Each full row is removed with [`Board::clear_row`]. Rows above a
    /// removed row were already scanned and are not full, so the scan simply
    /// continues downward. Returns the cleared row indices in scan order.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for row in 0..HEIGHT {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a 2D grid (used by snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (row, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row(row));
        }
    }

    /// Clear the entire board in place
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build from rows of cells, top first. Missing rows stay empty.
    pub fn from_rows(rows: &[[Cell; WIDTH]]) -> Self {
        let mut board = Self::new();
        let offset = HEIGHT.saturating_sub(rows.len());
        for (i, src) in rows.iter().take(HEIGHT).enumerate() {
            let start = (offset + i) * WIDTH;
            board.cells[start..start + WIDTH].copy_from_slice(src);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
