//! Gallery image lightbox

use std::time::{Duration, Instant};

use super::timing::progress;
use super::GalleryImage;

/// Lightbox visibility
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Lightbox {
    #[default]
    Hidden,
    Open {
        image: GalleryImage,
        opened: Instant,
    },
    /// Shrinking away; still blocks page scroll until hidden
    Closing {
        image: GalleryImage,
        since: Instant,
    },
}

impl Lightbox {
    pub const OPEN_DURATION: Duration = Duration::from_millis(300);
    pub const CLOSE_DURATION: Duration = Duration::from_millis(300);

    pub fn open(&mut self, image: GalleryImage, now: Instant) {
        tracing::debug!(src = %image.src, "opening lightbox");
        *self = Lightbox::Open { image, opened: now };
    }

    /// Start closing. No-op unless the lightbox is open.
    pub fn close(&mut self, now: Instant) {
        if let Lightbox::Open { image, .. } = self {
            *self = Lightbox::Closing {
                image: image.clone(),
                since: now,
            };
        }
    }

    /// Escape only acts while the lightbox is fully shown
    pub fn handle_escape(&mut self, now: Instant) -> bool {
        if self.is_open() {
            self.close(now);
            true
        } else {
            false
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Lightbox::Closing { since, .. } = self {
            if now.saturating_duration_since(*since) >= Self::CLOSE_DURATION {
                *self = Lightbox::Hidden;
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Lightbox::Hidden)
    }

    /// Page scroll is suppressed from open until fully hidden
    pub fn locks_scroll(&self) -> bool {
        self.is_visible()
    }

    pub fn image(&self) -> Option<&GalleryImage> {
        match self {
            Lightbox::Hidden => None,
            Lightbox::Open { image, .. } | Lightbox::Closing { image, .. } => Some(image),
        }
    }

    /// Image scale: 0.8 to 1.0 when opening, back to 0.8 when closing
    pub fn scale(&self, now: Instant) -> f32 {
        match self {
            Lightbox::Hidden => 0.8,
            Lightbox::Open { opened, .. } => {
                let p = progress(now.saturating_duration_since(*opened), Self::OPEN_DURATION);
                0.8 + 0.2 * simple_easing::sine_out(p)
            }
            Lightbox::Closing { since, .. } => {
                let p = progress(now.saturating_duration_since(*since), Self::CLOSE_DURATION);
                1.0 - 0.2 * simple_easing::sine_in(p)
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match self {
            Lightbox::Hidden => false,
            Lightbox::Open { opened, .. } => {
                now.saturating_duration_since(*opened) < Self::OPEN_DURATION
            }
            Lightbox::Closing { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> GalleryImage {
        GalleryImage {
            src: "images/lab.jpg".to_string(),
            alt: "Chemistry practical".to_string(),
        }
    }

    #[test]
    fn test_default_hidden() {
        let lightbox = Lightbox::default();
        assert!(!lightbox.is_visible());
        assert!(!lightbox.locks_scroll());
        assert!(lightbox.image().is_none());
    }

    #[test]
    fn test_open_shows_caption_and_locks_scroll() {
        let mut lightbox = Lightbox::default();
        lightbox.open(image(), Instant::now());
        assert!(lightbox.is_open());
        assert!(lightbox.locks_scroll());
        assert_eq!(lightbox.image().unwrap().alt, "Chemistry practical");
    }

    #[test]
    fn test_close_hides_after_delay() {
        let start = Instant::now();
        let mut lightbox = Lightbox::default();
        lightbox.open(image(), start);
        lightbox.close(start + Duration::from_millis(1_000));

        lightbox.tick(start + Duration::from_millis(1_299));
        assert!(lightbox.is_visible());
        assert!(lightbox.locks_scroll());

        lightbox.tick(start + Duration::from_millis(1_300));
        assert!(!lightbox.is_visible());
        assert!(!lightbox.locks_scroll());
    }

    #[test]
    fn test_escape_only_when_open() {
        let now = Instant::now();
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.handle_escape(now));

        lightbox.open(image(), now);
        assert!(lightbox.handle_escape(now));
        assert!(matches!(lightbox, Lightbox::Closing { .. }));

        // Already closing
        assert!(!lightbox.handle_escape(now));
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let mut lightbox = Lightbox::default();
        lightbox.close(Instant::now());
        assert_eq!(lightbox, Lightbox::Hidden);
    }

    #[test]
    fn test_scale_grows_on_open() {
        let start = Instant::now();
        let mut lightbox = Lightbox::default();
        lightbox.open(image(), start);
        assert!((lightbox.scale(start) - 0.8).abs() < f32::EPSILON);
        assert!((lightbox.scale(start + Duration::from_millis(300)) - 1.0).abs() < 1e-6);
    }
}
