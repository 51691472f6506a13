//! Submit flow for the contact form
//!
//! Validation decides the outcome; this module turns it into UI effects:
//! the fixed "Sending..." window, per-field errors, the success toast and
//! the delayed hand-off to the form endpoint.

use std::time::{Duration, Instant};

use super::form_state::ContactForm;
use crate::state::Toast;
use crate::validation::{validate, ContactField, ContactSubmission, ValidationResult};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";

/// Submit button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitButton {
    #[default]
    Ready,
    /// Disabled with a "Sending..." label for a fixed window
    Sending { since: Instant },
}

impl SubmitButton {
    /// How long the button stays disabled after any submit
    pub const SENDING_WINDOW: Duration = Duration::from_secs(2);

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ready => "Send Message",
            Self::Sending { .. } => "Sending...",
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }

    /// Restore the original label once the window has passed
    pub fn tick(&mut self, now: Instant) {
        if let Self::Sending { since } = *self {
            if now.saturating_duration_since(since) >= Self::SENDING_WINDOW {
                *self = Self::Ready;
            }
        }
    }
}

/// A validated submission waiting for its hand-off time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub submission: ContactSubmission,
    pub due: Instant,
}

/// Result of pressing submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Button was disabled; nothing happened
    Ignored,
    /// Validation failed on this many fields
    Invalid(usize),
    /// Valid; toast shown and hand-off scheduled
    Accepted,
}

/// Everything the contact section needs between frames
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: ValidationResult,
    pub button: SubmitButton,
    pub toast: Option<Toast>,
    pending: Vec<PendingSubmission>,
}

impl ContactFormState {
    /// Delay between a valid submit and the hand-off to the endpoint
    pub const HANDOFF_DELAY: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self, field: ContactField) -> Option<&str> {
        self.errors.error(field)
    }

    pub fn pending(&self) -> &[PendingSubmission] {
        &self.pending
    }

    /// Validate the current inputs and apply the outcome
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.button.is_disabled() {
            return SubmitOutcome::Ignored;
        }

        self.button = SubmitButton::Sending { since: now };
        self.errors.clear();

        let submission = self.form.to_submission();
        let result = validate(&submission);

        if result.is_valid() {
            tracing::info!("contact submission accepted");
            self.toast = Some(Toast::new(SUCCESS_MESSAGE, now));
            // The hand-off carries the values captured above, not the reset form
            self.pending.push(PendingSubmission {
                submission,
                due: now + Self::HANDOFF_DELAY,
            });
            self.form.reset();
            SubmitOutcome::Accepted
        } else {
            let count = result.len();
            tracing::debug!(fields = count, "contact submission rejected");
            self.errors = result;
            SubmitOutcome::Invalid(count)
        }
    }

    /// Advance timers; returns submissions whose hand-off time has come
    pub fn tick(&mut self, now: Instant) -> Vec<ContactSubmission> {
        self.button.tick(now);

        if let Some(toast) = &self.toast {
            if toast.phase(now) == crate::state::ToastPhase::Gone {
                self.toast = None;
            }
        }

        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| now >= p.due);
        self.pending = waiting;
        due.into_iter().map(|p| p.submission).collect()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.button.is_disabled()
            || !self.pending().is_empty()
            || self.toast.as_ref().is_some_and(|t| t.is_animating(now))
    }
}
