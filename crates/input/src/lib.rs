//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks
//! held keys so the game sees clean press/release edges, including on
//! terminals without key-release events.

pub mod handler;
pub mod map;

pub use blocktris_types as types;

pub use handler::{KeyInput, KeyTracker, DEFAULT_RELEASE_TIMEOUT_MS};
pub use map::{map_key, should_quit};
