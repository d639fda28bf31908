//! Active piece - position, orientation and board queries
//!
//! The piece is tracked by the top-left corner of its tight bounding box.
//! Every orientation is re-anchored to that corner (see [`crate::pieces`]), so
//! rotating never moves the corner except to pull the piece back inside the
//! right wall.

use crate::board::Board;
use crate::pieces::{oriented_shape, Shape};
use crate::types::{Cell, PieceKind, Rotation, Turn, BOARD_HEIGHT, BOARD_WIDTH};

/// Neighbouring occupied board cells, as seen from the piece's cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub left: bool,
    pub right: bool,
    /// Something directly under a piece cell. The floor itself is not reported
    /// here; falling past it is detected by the session.
    pub below: bool,
}

impl Contacts {
    /// Whether horizontal movement in `dir` is blocked.
    pub fn blocks(&self, dir: i8) -> bool {
        (dir < 0 && self.left) || (dir > 0 && self.right)
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
    shape: Shape,
}

impl ActivePiece {
    /// A freshly spawned piece: top row, horizontally centred.
    ///
    /// I pieces spawn horizontal (East); everything else spawns North.
    pub fn spawn(kind: PieceKind) -> Self {
        let rotation = if kind == PieceKind::I {
            Rotation::East
        } else {
            Rotation::North
        };
        let mut piece = Self::placed(kind, rotation, 0, 0);
        piece.col = (BOARD_WIDTH as i8 - piece.width() as i8) / 2;
        piece
    }

    /// A piece at an explicit position; the column is clamped inside the board.
    pub fn placed(kind: PieceKind, rotation: Rotation, row: i8, col: i8) -> Self {
        let mut piece = Self {
            kind,
            rotation,
            row,
            col,
            shape: oriented_shape(kind, rotation),
        };
        piece.clamp_col();
        piece
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn width(&self) -> u8 {
        self.shape.width
    }

    pub fn height(&self) -> u8 {
        self.shape.height
    }

    /// Largest column that keeps the piece on the board.
    pub fn max_col(&self) -> i8 {
        BOARD_WIDTH as i8 - self.width() as i8
    }

    /// Occupied cells in board coordinates, `(row, col, value)`.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.shape
            .cells()
            .map(move |(i, j, v)| (self.row + i, self.col + j, v))
    }

    /// Rotate in place. Returns false (and changes nothing) when rejected.
    ///
    /// The column is pulled in from the right wall if the new box is wider.
    /// Any turn other than [`Turn::Stay`] is rejected if a cell would land
    /// below the floor or on an occupied cell. There is no kick search.
    pub fn rotate(&mut self, turn: Turn, board: &Board) -> bool {
        let rotation = self.rotation.turned(turn);
        let shape = oriented_shape(self.kind, rotation);
        let col = self.col.min(BOARD_WIDTH as i8 - shape.width as i8);

        if turn != Turn::Stay {
            let blocked = shape.cells().any(|(i, j, _)| {
                let row = self.row + i;
                row >= BOARD_HEIGHT as i8 || board.is_occupied(row, col + j)
            });
            if blocked {
                return false;
            }
        }

        self.rotation = rotation;
        self.shape = shape;
        self.col = col;
        true
    }

    /// Scan the cells around the piece.
    pub fn contacts(&self, board: &Board) -> Contacts {
        let mut contacts = Contacts::default();
        for (row, col, _) in self.cells() {
            if row < 0 {
                continue;
            }
            if col > 0 && board.is_occupied(row, col - 1) {
                contacts.left = true;
            }
            if col < BOARD_WIDTH as i8 - 1 && board.is_occupied(row, col + 1) {
                contacts.right = true;
            }
            if row < BOARD_HEIGHT as i8 - 1 && board.is_occupied(row + 1, col) {
                contacts.below = true;
            }
        }
        contacts
    }

    /// Whether any piece cell sits on an occupied board cell.
    pub fn overlaps(&self, board: &Board) -> bool {
        self.cells().any(|(row, col, _)| board.is_occupied(row, col))
    }

    /// Shift horizontally by `dir` columns, then clamp.
    pub fn shift(&mut self, dir: i8) {
        self.col += dir;
        self.clamp_col();
    }

    /// Keep the column inside `[0, BOARD_WIDTH - width]`.
    pub fn clamp_col(&mut self) {
        self.col = self.col.clamp(0, self.max_col());
    }

    /// Copy the piece's cells onto the board.
    pub fn bake(&self, board: &mut Board) {
        for (row, col, value) in self.cells() {
            board.set(row, col, value);
        }
    }
}
