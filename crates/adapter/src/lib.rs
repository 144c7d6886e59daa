//! Adapter module - screen stream over WebSocket with a JSON protocol
//!
//! This crate connects the viewer to the producer that simulates the game. The
//! producer pushes one JSON text frame per screen update. The viewer only
//! listens and never sends application messages back.
//!
//! # Protocol Overview
//!
//! 1. **Connection**: the viewer connects once to the WebSocket endpoint
//!    (default: `ws://localhost:9000`). There is no reconnect.
//! 2. **Streaming**: the producer sends events shaped as
//!    `{"event": <name>, "data": <payload>}`.
//! 3. **Dispatch**: `update_screen` carries a screen. Other names are passed
//!    on as [`ViewerEvent::Unknown`](crate::types::ViewerEvent::Unknown) and ignored downstream.
//!
//! # Message Types
//!
//! ```text
//! Producer -> Viewer: {"event":"update_screen","data":[[0,0,1],[0,3,2]]}
//! ```
//!
//! Tile codes must be 0-3 and all rows must have the same length. Anything
//! else is rejected at decode time and reported as [`Inbound::Rejected`].
//!
//! # Environment Variables
//!
//! - `TILE_VIEWER_URL`: WebSocket endpoint (default: "ws://localhost:9000")
//!
//! # Implementation
//!
//! - Uses **tokio** and **tokio-tungstenite** for the connection
//! - [`runtime::Connection`] owns the runtime and exposes a non-blocking
//!   `try_recv` for the synchronous render loop
//! - See [`protocol`] for decoding and [`client`] for the connection task

pub mod client;
pub mod protocol;
pub mod runtime;

pub use tile_viewer_types as types;

pub use client::{run_client, ClientConfig, ConnectionStatus, Inbound, DEFAULT_URL};
pub use protocol::{decode_event, encode_event, DecodeError};
pub use runtime::Connection;
