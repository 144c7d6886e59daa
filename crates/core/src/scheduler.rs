//! Render scheduling.
//!
//! Under [`SchedulePolicy::Coalesce`] a submitted screen waits for the next
//! display refresh tick. A newer submission before that tick cancels the
//! waiting one, so a burst of updates costs a single render. Under
//! [`SchedulePolicy::Immediate`] every screen is handed straight back to be
//! rendered in arrival order.

use crate::types::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchedulePolicy {
    #[default]
    Coalesce,
    Immediate,
}

impl SchedulePolicy {
    /// Parse a policy name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "coalesce" | "coalescing" => Some(Self::Coalesce),
            "immediate" => Some(Self::Immediate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coalesce => "coalesce",
            Self::Immediate => "immediate",
        }
    }
}

/// A scheduled render that has not run yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRender {
    pub ticket: u64,
    pub screen: Screen,
}

/// Outcome of [`RenderScheduler::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Queued for the next refresh tick. `superseded` is the ticket of the
    /// render this one cancelled, if any.
    Scheduled {
        ticket: u64,
        superseded: Option<u64>,
    },
    /// Render this screen now.
    RenderNow(Screen),
}

#[derive(Debug, Clone)]
pub struct RenderScheduler {
    policy: SchedulePolicy,
    pending: Option<PendingRender>,
    next_ticket: u64,
}

impl RenderScheduler {
    pub fn new(policy: SchedulePolicy) -> Self {
        Self {
            policy,
            pending: None,
            next_ticket: 1,
        }
    }

    pub fn policy(&self) -> SchedulePolicy {
        self.policy
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn submit(&mut self, screen: Screen) -> Submission {
        match self.policy {
            SchedulePolicy::Immediate => Submission::RenderNow(screen),
            SchedulePolicy::Coalesce => {
                let superseded = self.pending.take().map(|p| p.ticket);
                let ticket = self.next_ticket;
                self.next_ticket += 1;
                self.pending = Some(PendingRender { ticket, screen });
                Submission::Scheduled { ticket, superseded }
            }
        }
    }

    /// Called once per display refresh tick. Yields the pending screen, if any.
    pub fn take_due(&mut self) -> Option<PendingRender> {
        self.pending.take()
    }

    /// Drop the pending render. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(SchedulePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    fn screen(tile: Tile) -> Screen {
        Screen::filled(2, 2, tile)
    }

    #[test]
    fn coalesce_keeps_only_latest_submission() {
        let mut s = RenderScheduler::new(SchedulePolicy::Coalesce);

        assert_eq!(
            s.submit(screen(Tile::Nothing)),
            Submission::Scheduled {
                ticket: 1,
                superseded: None
            }
        );
        assert_eq!(
            s.submit(screen(Tile::Block)),
            Submission::Scheduled {
                ticket: 2,
                superseded: Some(1)
            }
        );
        assert_eq!(
            s.submit(screen(Tile::Enemy)),
            Submission::Scheduled {
                ticket: 3,
                superseded: Some(2)
            }
        );

        let due = s.take_due().expect("pending render");
        assert_eq!(due.ticket, 3);
        assert_eq!(due.screen, screen(Tile::Enemy));
        assert!(s.take_due().is_none());
    }

    #[test]
    fn coalesce_with_tick_between_keeps_every_submission() {
        let mut s = RenderScheduler::new(SchedulePolicy::Coalesce);
        for tile in [Tile::Nothing, Tile::Block, Tile::Enemy] {
            assert!(matches!(
                s.submit(screen(tile)),
                Submission::Scheduled {
                    superseded: None,
                    ..
                }
            ));
            assert_eq!(s.take_due().map(|p| p.screen), Some(screen(tile)));
        }
    }

    #[test]
    fn immediate_never_holds_a_pending_render() {
        let mut s = RenderScheduler::new(SchedulePolicy::Immediate);
        assert_eq!(
            s.submit(screen(Tile::Mario)),
            Submission::RenderNow(screen(Tile::Mario))
        );
        assert!(!s.has_pending());
        assert!(s.take_due().is_none());
    }

    #[test]
    fn cancel_drops_pending() {
        let mut s = RenderScheduler::default();
        assert!(!s.cancel());
        s.submit(screen(Tile::Block));
        assert!(s.has_pending());
        assert!(s.cancel());
        assert!(!s.has_pending());
        assert!(s.take_due().is_none());
    }

    #[test]
    fn tickets_keep_increasing_across_ticks() {
        let mut s = RenderScheduler::default();
        s.submit(screen(Tile::Block));
        s.take_due();
        assert_eq!(
            s.submit(screen(Tile::Block)),
            Submission::Scheduled {
                ticket: 2,
                superseded: None
            }
        );
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!(
            SchedulePolicy::from_str("Coalesce"),
            Some(SchedulePolicy::Coalesce)
        );
        assert_eq!(
            SchedulePolicy::from_str(" immediate "),
            Some(SchedulePolicy::Immediate)
        );
        assert_eq!(SchedulePolicy::from_str("sometimes"), None);
        assert_eq!(SchedulePolicy::Immediate.as_str(), "immediate");
    }
}
