//! Best-effort offline worker registration
//!
//! The published site ships a worker script for offline use. Registration
//! here is a reachability check: the outcome is logged and never shown.

use crate::error::SiteError;

/// Fetch the worker script at `url`. Returns the HTTP status on success.
pub async fn register_offline_worker(client: &reqwest::Client, url: &str) -> Result<u16, SiteError> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(%url, error = %err, "offline worker registration failed");
            return Err(err.into());
        }
    };
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "offline worker registration failed");
        return Err(SiteError::Rejected {
            status: status.as_u16(),
        });
    }
    tracing::info!(%url, "offline worker registered");
    Ok(status.as_u16())
}
