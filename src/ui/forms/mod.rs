//! Form rendering module
//!
//! - `field_renderer`: field and error-row rendering
//! - `contact_form`: the contact section layout

mod contact_form;
mod field_renderer;

pub use contact_form::{contact_slot_at, draw_contact, CONTACT_HEIGHT};
