//! Frame renderer - pure, deterministic, and testable
//!
//! This crate turns decoded screens into fill operations on a drawing surface
//! and decides *when* those fills happen. It has **no dependencies** on the
//! terminal or the network, so every rule here can be checked with plain unit
//! tests against a [`RecordingSurface`].
//!
//! # Module Structure
//!
//! - [`surface`]: the [`Surface`] sink plus the in-memory [`PixelCanvas`] and [`RecordingSurface`]
//! - [`renderer`]: [`FrameRenderer`], one unit fill per tile
//! - [`scheduler`]: [`RenderScheduler`], coalescing or immediate render policy
//! - [`viewer`]: [`Viewer`], owner of the surface and the pending render
//! - [`config`]: [`ViewerConfig`], environment driven settings
//!
//! # Example
//!
//! ```
//! use tile_viewer_core::{PixelCanvas, SchedulePolicy, Viewer};
//! use tile_viewer_types::{Screen, TileColor, ViewerEvent};
//!
//! let mut viewer = Viewer::new(SchedulePolicy::Coalesce, PixelCanvas::new(2, 2));
//!
//! let screen = Screen::from_codes(vec![vec![0, 1], vec![2, 3]]).unwrap();
//! viewer.handle_event(ViewerEvent::UpdateScreen(screen));
//!
//! // Nothing is drawn until the next refresh tick.
//! assert_eq!(viewer.surface().get(1, 1), None);
//! assert!(viewer.on_refresh());
//! assert_eq!(viewer.surface().get(1, 1), Some(TileColor::Red.rgb()));
//! ```

pub mod config;
pub mod renderer;
pub mod scheduler;
pub mod surface;
pub mod viewer;

pub use tile_viewer_types as types;

pub use config::{ConfigLookup, ViewerConfig, IMMEDIATE_POLL, MAX_CANVAS_SIDE};
pub use renderer::FrameRenderer;
pub use scheduler::{PendingRender, RenderScheduler, SchedulePolicy, Submission};
pub use surface::{FillOp, PixelCanvas, RecordingSurface, Surface};
pub use viewer::{Viewer, ViewerStats};
