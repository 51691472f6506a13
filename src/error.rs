//! Typed errors for the site runtime

use thiserror::Error;

/// Failures that can occur outside of form validation.
///
/// Validation problems are never errors; they are reported through
/// [`crate::validation::ValidationResult`].
#[derive(Debug, Error)]
pub enum SiteError {
    /// A navigation control referenced a section id outside the known set
    #[error("unknown section id: {0:?}")]
    UnknownSection(String),

    /// The form endpoint could not be reached
    #[error("form submission failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The form endpoint answered with a non-success status
    #[error("form endpoint rejected submission with status {status}")]
    Rejected { status: u16 },

    /// No form action is configured, so there is nowhere to post to
    #[error("no form action configured")]
    NoFormAction,

    /// The user config file exists but is not valid JSON for its schema
    #[error("invalid config file: {0}")]
    Config(#[from] serde_json::Error),
}
