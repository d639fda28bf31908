//! Core game logic - pure, deterministic and testable
//!
//! This crate holds the complete ruleset. It has no dependencies on the
//! terminal or any other I/O, so the same seed always replays the same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 board, baking and row clearing
//! - [`pieces`]: the seven tetromino grids and the rotation transform
//! - [`piece`]: the active piece, rotation commit/reject and contact queries
//! - [`scoring`]: line bonuses, levels and the gravity curve
//! - [`palette`]: the three-slot colour indirection
//! - [`rng`]: seeded LCG for piece draws, palettes and demo input
//! - [`session`]: one game, advanced a tick at a time
//! - [`demo`]: synthetic input for the attract screen
//! - [`mode`]: menu, game and pause on top of a session
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces are drawn independently and uniformly (no bag) with a one-piece
//!   preview.
//! - Rotation has no wall kicks: a turn that would overlap the stack or pass
//!   the floor is rejected; a turn against the right wall pulls the piece in.
//! - A piece locks the tick it falls onto the stack or past the floor. There
//!   is no lock delay and no hard drop.
//! - Clears score 40/100/300/1200 times (level + 1); every row fallen while
//!   soft drop is held adds a point. Every 10 lines is a level.
//!
//! # Example
//!
//! ```
//! use blocktris_core::ModeController;
//! use blocktris_types::{GameAction, Mode};
//!
//! let mut ctl = ModeController::new(12345);
//! assert_eq!(ctl.mode(), Mode::Menu);
//!
//! // Enter starts a game
//! ctl.key_down(GameAction::Pause);
//! assert_eq!(ctl.mode(), Mode::Game);
//!
//! ctl.key_down(GameAction::SoftDrop);
//! for _ in 0..200 {
//!     ctl.tick();
//! }
//! assert!(ctl.session().points() > 0 || ctl.session().lines() == 0);
//! ```
//!
//! # Timing
//!
//! Everything is counted in ticks (16ms by default):
//! - **Gravity**: `2000 / (40 + 10 level + level² / 8)` ticks per row
//! - **Soft Drop**: 4 ticks per row
//! - **Horizontal repeat**: first step immediately, then every 6 ticks after 24
//!
//! Call [`ModeController::tick`](mode::ModeController::tick) once per tick.

pub mod board;
pub mod demo;
pub mod mode;
pub mod palette;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use demo::{DemoEvent, DemoPilot};
pub use mode::ModeController;
pub use palette::Palette;
pub use piece::{ActivePiece, Contacts};
pub use pieces::{oriented_shape, shape_grid, PieceGrid, Shape};
pub use rng::SimpleRng;
pub use scoring::{fall_rate, level_for_lines, line_bonus, lock_points};
pub use session::{GameSession, LockEvent};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
