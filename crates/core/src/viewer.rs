//! Viewer: the single owner of the drawing surface and the pending render.

use log::{debug, trace};

use crate::renderer::FrameRenderer;
use crate::scheduler::{RenderScheduler, SchedulePolicy, Submission};
use crate::surface::Surface;
use crate::types::{Screen, ViewerEvent};

/// Counters shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerStats {
    /// Screen updates received.
    pub received: u64,
    /// Renders that ran.
    pub rendered: u64,
    /// Pending renders cancelled by a newer screen.
    pub superseded: u64,
    /// Events with an unknown name.
    pub ignored: u64,
    /// Messages that failed to decode.
    pub rejected: u64,
}

pub struct Viewer<S> {
    renderer: FrameRenderer,
    scheduler: RenderScheduler,
    surface: S,
    stats: ViewerStats,
}

impl<S: Surface> Viewer<S> {
    pub fn new(policy: SchedulePolicy, surface: S) -> Self {
        Self {
            renderer: FrameRenderer::default(),
            scheduler: RenderScheduler::new(policy),
            surface,
            stats: ViewerStats::default(),
        }
    }

    /// Handle one inbound event.
    ///
    /// Returns true when the surface was painted right away, which only
    /// happens under [`SchedulePolicy::Immediate`].
    pub fn handle_event(&mut self, event: ViewerEvent) -> bool {
        match event {
            ViewerEvent::UpdateScreen(screen) => self.submit(screen),
            ViewerEvent::Unknown(name) => {
                debug!("ignoring event {:?}", name);
                self.stats.ignored += 1;
                false
            }
        }
    }

    fn submit(&mut self, screen: Screen) -> bool {
        self.stats.received += 1;
        match self.scheduler.submit(screen) {
            Submission::RenderNow(screen) => {
                self.paint(&screen);
                true
            }
            Submission::Scheduled { ticket, superseded } => {
                if let Some(old) = superseded {
                    trace!("render {} superseded by {}", old, ticket);
                    self.stats.superseded += 1;
                }
                false
            }
        }
    }

    /// Run the due render at a display refresh tick.
    ///
    /// Returns true when the surface changed.
    pub fn on_refresh(&mut self) -> bool {
        match self.scheduler.take_due() {
            Some(pending) => {
                trace!("running render {}", pending.ticket);
                self.paint(&pending.screen);
                true
            }
            None => false,
        }
    }

    fn paint(&mut self, screen: &Screen) {
        self.renderer.render(screen, &mut self.surface);
        self.stats.rendered += 1;
    }

    pub fn note_rejected(&mut self) {
        self.stats.rejected += 1;
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.has_pending()
    }

    pub fn policy(&self) -> SchedulePolicy {
        self.scheduler.policy()
    }

    pub fn stats(&self) -> ViewerStats {
        self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
