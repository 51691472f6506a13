//! Screen geometry for rendering and mouse hit-testing
//!
//! Both the renderer and the mouse handler ask [`PageLayout`] where things
//! are, so a click always lands on what was drawn.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:  Header (brand + nav tabs, or the menu button when narrow)
//! Row 3+:   Section body (scrollable)
//!           - dropdown menu overlays the top right when open
//!           - scroll-to-top control sits in the bottom right corner
//! Bottom:   Status bar (1 row)
//! ```

use super::SectionId;
use ratatui::layout::{Position, Rect};

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;

pub const BRAND: &str = "ZANAKI SECONDARY";
pub const MENU_BUTTON_LABEL: &str = "≡ Menu";
pub const SCROLL_TOP_LABEL: &str = "▲ Top";
pub const MENU_WIDTH: u16 = 20;

/// Terminal width below which the nav tabs collapse into the menu button
pub const DEFAULT_MENU_BREAKPOINT: u16 = 100;

/// What a mouse position points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    NavTab(SectionId),
    MenuButton,
    MenuItem(SectionId),
    /// Inside the open dropdown but not on an item (its border)
    Menu,
    ScrollTop,
    /// Row relative to the top of the body area
    Body { col: u16, row: u16 },
    Header,
    StatusBar,
}

/// Screen regions for one terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub area: Rect,
    /// Narrow terminal: menu button instead of nav tabs
    pub compact: bool,
}

impl PageLayout {
    pub fn new(area: Rect, breakpoint: u16) -> Self {
        Self {
            area,
            compact: area.width < breakpoint,
        }
    }

    pub fn header(&self) -> Rect {
        Rect {
            height: HEADER_HEIGHT.min(self.area.height),
            ..self.area
        }
    }

    pub fn status_bar(&self) -> Rect {
        Rect {
            x: self.area.x,
            y: self.area.bottom().saturating_sub(STATUS_BAR_HEIGHT),
            width: self.area.width,
            height: STATUS_BAR_HEIGHT.min(self.area.height),
        }
    }

    pub fn body(&self) -> Rect {
        Rect {
            x: self.area.x,
            y: self.area.y + HEADER_HEIGHT.min(self.area.height),
            width: self.area.width,
            height: self
                .area
                .height
                .saturating_sub(HEADER_HEIGHT + STATUS_BAR_HEIGHT),
        }
    }

    /// Nav tab positions, in navigation order. Empty when compact.
    pub fn nav_tabs(&self) -> Vec<(SectionId, Rect)> {
        if self.compact {
            return Vec::new();
        }
        let row = self.area.y + 1;
        let right = self.area.right().saturating_sub(1);
        let mut x = self.area.x + 2 + BRAND.chars().count() as u16 + 3;
        let mut tabs = Vec::with_capacity(SectionId::ALL.len());
        for id in SectionId::ALL {
            let width = id.label().chars().count() as u16 + 2;
            if x + width > right {
                break;
            }
            tabs.push((id, Rect::new(x, row, width, 1)));
            x += width + 1;
        }
        tabs
    }

    /// The menu trigger, only shown when compact
    pub fn menu_button(&self) -> Option<Rect> {
        if !self.compact {
            return None;
        }
        let width = MENU_BUTTON_LABEL.chars().count() as u16 + 2;
        Some(Rect::new(
            self.area.right().saturating_sub(width + 2).max(self.area.x),
            self.area.y + 1,
            width.min(self.area.width),
            1,
        ))
    }

    /// Dropdown menu box, bordered, one row per section
    pub fn dropdown(&self) -> Rect {
        let body = self.body();
        let width = MENU_WIDTH.min(self.area.width);
        let height = (SectionId::ALL.len() as u16 + 2).min(body.height);
        Rect::new(
            self.area.right().saturating_sub(width + 1).max(self.area.x),
            body.y,
            width,
            height,
        )
    }

    pub fn scroll_top_button(&self) -> Rect {
        let body = self.body();
        let width = SCROLL_TOP_LABEL.chars().count() as u16 + 2;
        Rect::new(
            self.area.right().saturating_sub(width + 1).max(self.area.x),
            body.bottom().saturating_sub(1).max(body.y),
            width.min(self.area.width),
            1,
        )
    }

    /// Lightbox frame at `scale` (1.0 = fully open), centered on screen
    pub fn lightbox(&self, scale: f32) -> Rect {
        let full_width = self.area.width.saturating_sub(8).min(64);
        let full_height = self.area.height.saturating_sub(6).min(16);
        let scale = scale.clamp(0.0, 1.0);
        let width = (full_width as f32 * scale).round() as u16;
        let height = (full_height as f32 * scale).round() as u16;
        Rect::new(
            self.area.x + (self.area.width.saturating_sub(width)) / 2,
            self.area.y + (self.area.height.saturating_sub(height)) / 2,
            width,
            height,
        )
    }

    /// The lightbox close control, on its top border
    pub fn lightbox_close(&self, scale: f32) -> Rect {
        let frame = self.lightbox(scale);
        Rect::new(frame.right().saturating_sub(5).max(frame.x), frame.y, 3, 1)
    }

    /// Resolve a mouse position against the current overlays
    pub fn hit(&self, col: u16, row: u16, menu_open: bool, scroll_top_visible: bool) -> Hit {
        let pos = Position::new(col, row);

        if menu_open {
            let dropdown = self.dropdown();
            if dropdown.contains(pos) {
                let item = row.saturating_sub(dropdown.y + 1) as usize;
                let inside_border = row > dropdown.y && row + 1 < dropdown.bottom();
                return match SectionId::ALL.get(item) {
                    Some(id) if inside_border => Hit::MenuItem(*id),
                    _ => Hit::Menu,
                };
            }
        }

        if let Some(button) = self.menu_button() {
            if button.contains(pos) {
                return Hit::MenuButton;
            }
        }

        if let Some((id, _)) = self.nav_tabs().into_iter().find(|(_, r)| r.contains(pos)) {
            return Hit::NavTab(id);
        }

        if scroll_top_visible && self.scroll_top_button().contains(pos) {
            return Hit::ScrollTop;
        }

        if self.status_bar().contains(pos) {
            return Hit::StatusBar;
        }

        let body = self.body();
        if body.contains(pos) {
            return Hit::Body {
                col: col - body.x,
                row: row - body.y,
            };
        }

        Hit::Header
    }
}
