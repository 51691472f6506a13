//! Success toast shown after a valid contact submission

use std::time::{Duration, Instant};

use super::timing::progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    SlidingIn,
    Shown,
    SlidingOut,
    Gone,
}

/// A transient toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub const SLIDE: Duration = Duration::from_millis(300);
    /// Time from appearing until it starts sliding out
    pub const VISIBLE_FOR: Duration = Duration::from_secs(5);

    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
        }
    }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed < Self::SLIDE {
            ToastPhase::SlidingIn
        } else if elapsed < Self::VISIBLE_FOR {
            ToastPhase::Shown
        } else if elapsed < Self::VISIBLE_FOR + Self::SLIDE {
            ToastPhase::SlidingOut
        } else {
            ToastPhase::Gone
        }
    }

    /// Fraction of the toast pushed off the right edge (1.0 = fully hidden)
    pub fn offscreen(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        match self.phase(now) {
            ToastPhase::SlidingIn => 1.0 - simple_easing::sine_out(progress(elapsed, Self::SLIDE)),
            ToastPhase::Shown => 0.0,
            ToastPhase::SlidingOut => {
                simple_easing::sine_in(progress(elapsed - Self::VISIBLE_FOR, Self::SLIDE))
            }
            ToastPhase::Gone => 1.0,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.phase(now), ToastPhase::SlidingIn | ToastPhase::SlidingOut)
    }
}
