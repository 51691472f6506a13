//! Smooth scrolling and the scroll-to-top control

use std::time::{Duration, Instant};

use super::timing::{progress, Throttle};

/// Eased scroll from one offset to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: u16,
    to: u16,
    started: Instant,
}

impl SmoothScroll {
    pub const DURATION: Duration = Duration::from_millis(800);

    pub fn new(from: u16, to: u16, started: Instant) -> Self {
        Self { from, to, started }
    }

    /// Offset at `now` with quadratic in-out easing
    pub fn position(&self, now: Instant) -> u16 {
        let p = progress(now.saturating_duration_since(self.started), Self::DURATION);
        let eased = simple_easing::quad_in_out(p);
        let distance = self.to as f32 - self.from as f32;
        (self.from as f32 + distance * eased).round().max(0.0) as u16
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= Self::DURATION
    }
}

/// Visibility of the "back to top" control
#[derive(Debug, Clone)]
pub struct ScrollTopButton {
    visible: bool,
    throttle: Throttle,
}

impl ScrollTopButton {
    /// Rows scrolled before the control appears
    pub const THRESHOLD: u16 = 10;
    pub const CHECK_INTERVAL: Duration = Duration::from_millis(100);

    pub fn new() -> Self {
        Self {
            visible: false,
            throttle: Throttle::new(Self::CHECK_INTERVAL),
        }
    }

    /// Re-evaluate visibility, at most once per check interval
    pub fn on_scroll(&mut self, offset: u16, now: Instant) {
        if self.throttle.ready(now) {
            self.visible = offset > Self::THRESHOLD;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for ScrollTopButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    mod smooth_scroll {
        use super::*;

        #[test]
        fn test_endpoints() {
            let start = Instant::now();
            let scroll = SmoothScroll::new(40, 0, start);
            assert_eq!(scroll.position(start), 40);
            assert_eq!(scroll.position(start + ms(400)), 20);
            assert_eq!(scroll.position(start + ms(800)), 0);
            assert!(scroll.is_finished(start + ms(800)));
            assert!(!scroll.is_finished(start + ms(799)));
        }

        #[test]
        fn test_eases_slowly_at_start() {
            let start = Instant::now();
            let scroll = SmoothScroll::new(100, 0, start);
            // Quadratic start covers much less than a linear 10%
            assert!(scroll.position(start + ms(80)) > 95);
        }
    }

    mod scroll_top_button {
        use super::*;

        #[test]
        fn test_hidden_initially() {
            assert!(!ScrollTopButton::default().is_visible());
        }

        #[test]
        fn test_shows_past_threshold() {
            let start = Instant::now();
            let mut button = ScrollTopButton::new();
            button.on_scroll(10, start);
            assert!(!button.is_visible());
            button.on_scroll(11, start + ms(100));
            assert!(button.is_visible());
        }

        #[test]
        fn test_updates_are_throttled() {
            let start = Instant::now();
            let mut button = ScrollTopButton::new();
            button.on_scroll(20, start);
            button.on_scroll(0, start + ms(50));
            assert!(button.is_visible());
            button.on_scroll(0, start + ms(100));
            assert!(!button.is_visible());
        }
    }
}
