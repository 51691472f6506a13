//! Trait abstraction for the form endpoint to enable mocking in tests

use crate::error::SiteError;
use crate::validation::ContactSubmission;
use async_trait::async_trait;

/// Destination for validated contact submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormEndpoint: Send + Sync {
    /// Deliver one submission. Nothing waits on the outcome beyond logging it.
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SiteError>;
}
