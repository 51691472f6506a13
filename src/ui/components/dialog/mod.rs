//! Dialog components for TUI

mod base;
mod lightbox;

pub use lightbox::render_lightbox;
