//! Loading screen animation state

use std::time::{Duration, Instant};

use super::timing::progress;

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Static logo display, page not yet usable
    Display,
    /// Logo sliding off the top over the usable page
    ScrollUp,
    /// Overlay gone
    Complete,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct LoadingScreen {
    /// When the loading screen started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: LoadingPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl LoadingScreen {
    /// Time the logo is held before the page becomes usable
    pub const DISPLAY_DURATION: Duration = Duration::from_millis(1500);
    /// Duration of the slide-away animation
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(600);

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: LoadingPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.phase == LoadingPhase::Complete {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = LoadingPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = LoadingPhase::ScrollUp;
            let p = progress(elapsed - Self::DISPLAY_DURATION, Self::ANIMATION_DURATION);
            // Cubic ease-out for smooth deceleration
            self.scroll_offset = simple_easing::cubic_out(p) * terminal_height as f32;
        } else {
            self.phase = LoadingPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = LoadingPhase::Complete;
    }

    /// Check if the loading screen is finished
    pub fn is_complete(&self) -> bool {
        self.phase == LoadingPhase::Complete
    }

    /// Whether the page underneath accepts input
    pub fn page_ready(&self) -> bool {
        self.phase != LoadingPhase::Display
    }
}
