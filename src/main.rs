//! Terminal tile viewer (default binary).
//!
//! Connects to the screen producer, paints each screen it streams onto a pixel
//! canvas and shows that canvas in the terminal. Screens are painted on the
//! refresh tick (coalescing) unless `TILE_VIEWER_SCHEDULE=immediate`.

use std::fs::OpenOptions;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tile_viewer::adapter::{ClientConfig, Connection, ConnectionStatus, Inbound};
use tile_viewer::core::{PixelCanvas, Viewer, ViewerConfig};
use tile_viewer::term::{
    should_quit, CanvasView, FrameBuffer, StatusLine, TerminalRenderer, Viewport,
};

fn main() -> Result<()> {
    init_logging()?;

    let config = ViewerConfig::from_env();
    let client = ClientConfig::from_env();
    info!(
        "starting viewer for {} ({}, {}ms refresh, {}x{} canvas)",
        client.url,
        config.policy.as_str(),
        config.refresh_ms,
        config.canvas_width,
        config.canvas_height
    );

    let connection = Connection::start(client)?;
    let mut app = App::new(config, connection);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = app.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let log_path = std::env::var("TILE_VIEWER_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

struct App {
    config: ViewerConfig,
    connection: Connection,
    status: ConnectionStatus,
    last_rejected: Option<String>,
    viewer: Viewer<PixelCanvas>,
    view: CanvasView,
    fb: FrameBuffer,
}

impl App {
    fn new(config: ViewerConfig, connection: Connection) -> Self {
        let canvas = PixelCanvas::new(config.canvas_width, config.canvas_height);
        Self {
            viewer: Viewer::new(config.policy, canvas),
            config,
            connection,
            status: ConnectionStatus::Connecting,
            last_rejected: None,
            view: CanvasView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let tick = self.config.refresh_interval();
        let mut next_tick = Instant::now() + tick;
        self.present(term)?;

        loop {
            let mut dirty = false;

            // Drain everything the connection delivered since the last pass.
            while let Some(inbound) = self.connection.try_recv() {
                match inbound {
                    Inbound::Event(event) => {
                        if self.viewer.handle_event(event) {
                            self.present(term)?;
                        }
                    }
                    Inbound::Status(status) => {
                        info!("connection {}", status);
                        self.status = status;
                        dirty = true;
                    }
                    Inbound::Rejected(reason) => {
                        self.viewer.note_rejected();
                        self.last_rejected = Some(reason);
                        dirty = true;
                    }
                }
            }

            // Refresh tick.
            let now = Instant::now();
            if now >= next_tick {
                next_tick = now + tick;
                dirty |= self.viewer.on_refresh();
            }

            if dirty {
                self.present(term)?;
            }

            // Terminal input until the next tick, or briefly under Immediate.
            let timeout = self
                .config
                .poll_timeout(next_tick.saturating_duration_since(Instant::now()));
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                        return Ok(());
                    }
                    Event::Resize(..) => {
                        term.invalidate();
                        self.present(term)?;
                    }
                    _ => {}
                }
            }
        }
    }

    fn present(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let connection = self.status.to_string();
        let status = StatusLine {
            endpoint: self.connection.url(),
            connection: &connection,
            policy: self.viewer.policy(),
            stats: self.viewer.stats(),
            last_reject: self.last_rejected.as_deref(),
        };
        self.view.render_into(
            self.viewer.surface(),
            Some(&status),
            Viewport::new(w, h),
            &mut self.fb,
        );
        term.draw_swap(&mut self.fb)
    }
}
