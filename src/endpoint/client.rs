//! HTTP client for the contact form action

use super::FormEndpoint;
use crate::error::SiteError;
use crate::validation::ContactSubmission;
use async_trait::async_trait;
use std::time::Duration;

/// Posts submissions as a urlencoded form to the configured action
#[derive(Debug, Clone)]
pub struct HttpFormEndpoint {
    client: reqwest::Client,
    action: Option<String>,
}

impl HttpFormEndpoint {
    pub const TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(action: Option<String>) -> Result<Self, SiteError> {
        let client = reqwest::Client::builder().timeout(Self::TIMEOUT).build()?;
        let action = action
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        Ok(Self { client, action })
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Shared client, reused for offline worker registration
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl FormEndpoint for HttpFormEndpoint {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), SiteError> {
        let action = self.action.as_deref().ok_or(SiteError::NoFormAction)?;

        let response = self.client.post(action).form(submission).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(status = status.as_u16(), "contact submission delivered");
        Ok(())
    }
}
