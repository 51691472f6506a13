//! Contact form domain layer
//!
//! Inputs and focus live in the contact form; the submit flow around the
//! pure validator lives in [`ContactFormState`].

mod contact_flow;
mod field;
mod form_state;

pub use contact_flow::{ContactFormState, SubmitButton, SubmitOutcome};
#[cfg(test)]
pub use contact_flow::SUCCESS_MESSAGE;
pub use field::FormField;
pub use form_state::Form;
