//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot into a
//! framebuffer of styled cells and the renderer flushes only what changed.
//! Board cells are 2 columns wide to compensate for terminal glyph aspect.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{curtain_rows, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
