//! Terminal presentation layer.
//!
//! The core paints screens onto a [`PixelCanvas`](tile_viewer_core::PixelCanvas).
//! This crate shows that canvas in a terminal: [`CanvasView`] scales the
//! pixels into a [`FrameBuffer`] of styled cells, and [`TerminalRenderer`]
//! flushes only the cells that changed since the last frame.
//!
//! Each canvas pixel is drawn 2 columns wide per row to make up for the
//! typical glyph aspect ratio.

pub mod canvas_view;
pub mod fb;
pub mod input;
pub mod renderer;

pub use tile_viewer_core as core;
pub use tile_viewer_types as types;

pub use canvas_view::{CanvasView, StatusLine, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use input::should_quit;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
