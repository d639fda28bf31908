//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal view and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Timing
//!
//! Everything is counted in integer ticks. The frame loop drives one tick
//! every [`TICK_MS`] milliseconds (about 60 Hz).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MOVE_WAIT` | 24 | Ticks a move key must be held before it repeats |
//! | `MOVE_RATE` | 6 | Ticks between repeats once repeating |
//! | `SOFT_DROP_RATE` | 4 | Fall rate while soft drop is held |
//! | `ATTRACT_RESET_TICKS` | 120 | Ticks after the curtain before the demo restarts |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{GameAction, PieceKind, Rotation, Turn, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_index(6).unwrap();
//! assert_eq!(kind, PieceKind::I);
//! assert_eq!(kind.as_str(), "i");
//!
//! assert_eq!(Rotation::North.turned(Turn::Ccw), Rotation::West);
//! assert_eq!(GameAction::SoftDrop.as_str(), "softDrop");
//! assert!(!GameAction::DEMO.contains(&GameAction::Pause));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Ticks between horizontal repeats while a move key is held.
pub const MOVE_RATE: u32 = 6;

/// Ticks a move key must be held before repeats start.
pub const MOVE_WAIT: u32 = 24;

/// Fall rate (ticks per row) while soft drop is held.
pub const SOFT_DROP_RATE: u32 = 4;

/// Size of one board cell in layout units.
///
/// The curtain animation is measured in these units.
pub const UNIT: u32 = 35;

/// Curtain advance per tick.
pub const CURTAIN_SPEED: u32 = UNIT / 5;

/// Curtain height once fully drawn (the board height in layout units).
pub const CURTAIN_HEIGHT: u32 = UNIT * BOARD_HEIGHT as u32;

/// Ticks the attract game waits after its curtain before restarting.
pub const ATTRACT_RESET_TICKS: u32 = 120;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear bonus by number of rows cleared at once.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Number of palette slots a cell value can reference (cell values 1..=3).
pub const PALETTE_SLOTS: usize = 3;

/// Number of colours sampled on every level up.
///
/// One more than [`PALETTE_SLOTS`]; the extra sample is never rendered.
pub const PALETTE_DRAWS: usize = 4;

/// Full colour table (ARGB) the palette samples from.
pub const COLOURS: [u32; 11] = [
    0xffff0000, // red
    0xff00ff00, // green
    0xff0000ff, // blue
    0xff00ffff, // cyan
    0xffff00ff, // magenta
    0xffffff00, // yellow
    0xffff8000, // orange
    0xff8000ff, // purple
    0xff00ff80, // turquoise
    0xff808080, // grey
    0xffffffff, // white
];

/// Cell on the board (0 = empty, 1..=3 = palette slot + 1)
pub type Cell = u8;

/// Empty cell value.
pub const EMPTY: Cell = 0;

/// Tetromino piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    J,
    L,
    Z,
    S,
    T,
    I,
}

impl PieceKind {
    /// All kinds in catalog order (index 0..6).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
        PieceKind::I,
    ];

    /// Catalog index (0..6)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::I => "i",
        }
    }
}

/// Direction of a rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise quarter turn
    Ccw,
    /// Re-derive the current orientation (used on spawn, never rejected)
    Stay,
    /// Clockwise quarter turn
    Cw,
}

impl Turn {
    pub fn delta(self) -> i8 {
        match self {
            Turn::Ccw => -1,
            Turn::Stay => 0,
            Turn::Cw => 1,
        }
    }
}

/// Rotation states (North = spawn orientation), quarter turns clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    const ORDER: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Quarter turns clockwise from North (0..3)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Build from any quarter-turn count; wraps modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ORDER[index % 4]
    }

    /// Apply a turn: `(current + delta + 4) mod 4`
    pub fn turned(self, turn: Turn) -> Self {
        let next = (self.index() as i8 + turn.delta() + 4) % 4;
        Self::from_index(next as usize)
    }
}

/// Logical inputs understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    RotateCcw,
    RotateCw,
    MoveLeft,
    MoveRight,
    SoftDrop,
    /// Pause in a running game, confirm in the menu and on the game-over screen.
    Pause,
}

impl GameAction {
    /// Actions the attract-mode demo may press, in draw order.
    pub const DEMO: [GameAction; 5] = [
        GameAction::RotateCcw,
        GameAction::RotateCw,
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
    ];

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RotateCcw => "rotateCcw",
            GameAction::RotateCw => "rotateCw",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Pause => "pause",
        }
    }
}

/// Top-level screen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Title screen with the game playing itself.
    #[default]
    Menu,
    /// Player-controlled game.
    Game,
}
