//! Deadline-based debounce and throttle helpers
//!
//! Nothing here owns a timer. Callers feed in `Instant`s from the frame tick,
//! which keeps the helpers deterministic under test.

use std::time::{Duration, Instant};

/// Fires once, `wait` after the most recent trigger
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    due: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self { wait, due: None }
    }

    /// Restart the wait window
    pub fn trigger(&mut self, now: Instant) {
        self.due = Some(now + self.wait);
    }

    /// Returns true exactly once when the wait window has elapsed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }
}

/// Lets a call through at most once per `limit`
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    /// Returns true if the call may run now, and starts a new window if so
    pub fn ready(&mut self, now: Instant) -> bool {
        let open = self
            .last
            .map_or(true, |last| now.saturating_duration_since(last) >= self.limit);
        if open {
            self.last = Some(now);
        }
        open
    }
}

/// Progress of `elapsed` through `total`, clamped to 0.0..=1.0
pub fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
