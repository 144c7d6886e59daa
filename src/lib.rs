//! Tile viewer (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so integration tests,
//! benches and the binary can use `tile_viewer::{adapter,core,term,types}`.

pub use tile_viewer_adapter as adapter;
pub use tile_viewer_core as core;
pub use tile_viewer_term as term;
pub use tile_viewer_types as types;
