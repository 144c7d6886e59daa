//! Viewer configuration from environment variables.
//!
//! - `TILE_VIEWER_SCHEDULE`: `coalesce` (default) or `immediate`
//! - `TILE_VIEWER_REFRESH_MS`: refresh tick in milliseconds (default 16, min 1)
//! - `TILE_VIEWER_CANVAS`: canvas size as `WxH` (default `13x13`, each side at most 4096)
//!
//! Invalid values fall back to the default with a warning.

use std::time::Duration;

use log::warn;

use crate::scheduler::SchedulePolicy;
use crate::types::{REFRESH_MS, SCREEN_SIZE};

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: usize = 4096;

/// Longest input wait under [`SchedulePolicy::Immediate`].
pub const IMMEDIATE_POLL: Duration = Duration::from_millis(1);

/// Source of configuration values, keyed by variable name.
pub trait ConfigLookup {
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> ConfigLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub policy: SchedulePolicy,
    pub refresh_ms: u32,
    pub canvas_width: usize,
    pub canvas_height: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            policy: SchedulePolicy::Coalesce,
            refresh_ms: REFRESH_MS,
            canvas_width: SCREEN_SIZE,
            canvas_height: SCREEN_SIZE,
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl ConfigLookup) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let policy = match value("TILE_VIEWER_SCHEDULE") {
            None => defaults.policy,
            Some(s) => SchedulePolicy::from_str(&s).unwrap_or_else(|| {
                warn!("TILE_VIEWER_SCHEDULE={:?} is not a policy, using coalesce", s);
                defaults.policy
            }),
        };

        let refresh_ms = match value("TILE_VIEWER_REFRESH_MS") {
            None => defaults.refresh_ms,
            Some(s) => match s.parse::<u32>() {
                Ok(ms) if ms >= 1 => ms,
                _ => {
                    warn!("TILE_VIEWER_REFRESH_MS={:?} is invalid, using {}", s, REFRESH_MS);
                    defaults.refresh_ms
                }
            },
        };

        let (canvas_width, canvas_height) = match value("TILE_VIEWER_CANVAS") {
            None => (defaults.canvas_width, defaults.canvas_height),
            Some(s) => parse_size(&s).unwrap_or_else(|| {
                warn!(
                    "TILE_VIEWER_CANVAS={:?} is not WxH, using {}x{}",
                    s, SCREEN_SIZE, SCREEN_SIZE
                );
                (defaults.canvas_width, defaults.canvas_height)
            }),
        };

        Self {
            policy,
            refresh_ms,
            canvas_width,
            canvas_height,
        }
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms as u64)
    }

    /// How long the main loop may block on terminal input, given the time left
    /// until the next refresh tick.
    ///
    /// Immediate paints on arrival, so the wait is capped at [`IMMEDIATE_POLL`]
    /// to keep the connection channel drained promptly.
    pub fn poll_timeout(&self, until_tick: Duration) -> Duration {
        match self.policy {
            SchedulePolicy::Coalesce => until_tick,
            SchedulePolicy::Immediate => until_tick.min(IMMEDIATE_POLL),
        }
    }
}

/// Parse `WxH` (either `x` or `X`), both sides in `1..=MAX_CANVAS_SIDE`.
fn parse_size(s: &str) -> Option<(usize, usize)> {
    let (w, h) = s.split_once(['x', 'X'])?;
    let w = w.trim().parse::<usize>().ok()?;
    let h = h.trim().parse::<usize>().ok()?;
    let side = 1..=MAX_CANVAS_SIDE;
    if !side.contains(&w) || !side.contains(&h) {
        return None;
    }
    Some((w, h))
}
