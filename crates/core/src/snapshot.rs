//! Read-only view of the game handed to renderers.

use crate::piece::ActivePiece;
use crate::pieces::{shape_grid, PieceGrid};
use crate::types::{Cell, Mode, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, COLOURS, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
    /// Oriented grid, anchored at (row, col).
    pub grid: PieceGrid,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
            grid: value.shape().grid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    /// Canonical grid of the next piece, for the preview box.
    pub next_grid: PieceGrid,
    /// Colour-table indices for cell values 1..=3.
    pub palette: [usize; 3],
    pub points: u64,
    pub level: u32,
    pub lines: u32,
    pub mode: Mode,
    pub paused: bool,
    pub game_over: bool,
    /// Curtain height in layout units while the game-over wipe plays.
    pub curtain: Option<u32>,
    pub end_timer: Option<u32>,
}

impl GameSnapshot {
    /// ARGB colour for a cell value through the current palette.
    pub fn colour(&self, cell: Cell) -> Option<u32> {
        match cell {
            1..=3 => Some(COLOURS[self.palette[cell as usize - 1]]),
            _ => None,
        }
    }

    pub fn playable(&self) -> bool {
        self.mode == Mode::Game && !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::O,
            next_grid: shape_grid(PieceKind::O),
            palette: [0, 1, 2],
            points: 0,
            level: 0,
            lines: 0,
            mode: Mode::Menu,
            paused: false,
            game_over: false,
            curtain: None,
            end_timer: None,
        }
    }
}
