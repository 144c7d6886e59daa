//! WebSocket client task.
//!
//! Connects once, decodes every text frame and forwards the result to the
//! render loop in arrival order. There is no reconnect and nothing is sent
//! upstream.

use std::fmt;

use anyhow::Context;
use futures_util::StreamExt;
use log::{debug, error, info, warn};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::protocol::decode_event;
use crate::types::ViewerEvent;

/// Endpoint used when `TILE_VIEWER_URL` is unset.
pub const DEFAULT_URL: &str = "ws://localhost:9000";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("TILE_VIEWER_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        Self { url }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Closed,
    Failed(String),
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Connecting => f.write_str("connecting"),
            ConnectionStatus::Connected => f.write_str("connected"),
            ConnectionStatus::Closed => f.write_str("closed"),
            ConnectionStatus::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Item delivered to the render loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Status(ConnectionStatus),
    Event(ViewerEvent),
    /// A frame that could not be decoded, with the reason.
    Rejected(String),
}

/// Connect and stream until the peer closes or `tx` is dropped.
pub async fn run_client(
    config: ClientConfig,
    tx: mpsc::UnboundedSender<Inbound>,
) -> anyhow::Result<()> {
    let _ = tx.send(Inbound::Status(ConnectionStatus::Connecting));
    info!("connecting to {}", config.url);

    let mut ws = match connect_async(config.url.as_str()).await {
        Ok((ws, _response)) => ws,
        Err(e) => {
            error!("connection to {} failed: {}", config.url, e);
            let _ = tx.send(Inbound::Status(ConnectionStatus::Failed(e.to_string())));
            return Err(e).with_context(|| format!("failed to connect to {}", config.url));
        }
    };

    info!("connected to {}", config.url);
    let _ = tx.send(Inbound::Status(ConnectionStatus::Connected));

    let mut frames = 0u64;
    while let Some(msg) = ws.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(e) => {
                error!("connection to {} lost: {}", config.url, e);
                let _ = tx.send(Inbound::Status(ConnectionStatus::Failed(e.to_string())));
                return Err(e).context("websocket read failed");
            }
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Binary(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(_) => {
                    warn!("dropping non-UTF-8 binary frame");
                    continue;
                }
            },
            Message::Close(frame) => {
                debug!("peer closed: {:?}", frame);
                break;
            }
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => continue,
        };

        frames += 1;
        let inbound = match decode_event(&text) {
            Ok(event) => Inbound::Event(event),
            Err(e) => {
                warn!("rejecting frame {}: {}", frames, e);
                Inbound::Rejected(e.to_string())
            }
        };

        if tx.send(inbound).is_err() {
            debug!("render loop gone, stopping client");
            return Ok(());
        }
    }

    info!("connection to {} closed after {} frames", config.url, frames);
    let _ = tx.send(Inbound::Status(ConnectionStatus::Closed));
    Ok(())
}
