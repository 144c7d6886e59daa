//! Adapter runtime integration.
//!
//! Bridges the synchronous render loop with the async WebSocket client.

use anyhow::{Context, Result};
use log::debug;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;

use crate::client::{run_client, ClientConfig, Inbound};

/// Running connection. Dropping it shuts the client down.
pub struct Connection {
    _rt: Runtime,
    url: String,
    rx: mpsc::UnboundedReceiver<Inbound>,
}

impl Connection {
    pub fn start(config: ClientConfig) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("tile-viewer-net")
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;

        let url = config.url.clone();
        let (tx, rx) = mpsc::unbounded_channel::<Inbound>();
        rt.spawn(async move {
            if let Err(e) = run_client(config, tx).await {
                // run_client already logged the failure.
                debug!("client stopped: {:#}", e);
            }
        });

        Ok(Self { _rt: rt, url, rx })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn try_recv(&mut self) -> Option<Inbound> {
        self.rx.try_recv().ok()
    }
}
