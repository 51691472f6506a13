//! Reusable UI components

mod button;
mod dialog;
mod toast;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::render_lightbox;
pub use toast::render_toast;
