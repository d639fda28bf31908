//! blocktris (workspace facade crate).
//!
//! Re-exports the workspace crates as `blocktris::{core,input,term,types}`
//! and holds the binary's configuration.

pub mod config;

pub use blocktris_core as core;
pub use blocktris_input as input;
pub use blocktris_term as term;
pub use blocktris_types as types;
