//! Shared response handling for all upstream clients.

use serde::de::DeserializeOwned;

use crate::error::RemoteError;

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`RemoteError::Rejected`] containing the
/// status and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RemoteError::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Check the status, then decode the body into `T`.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteError> {
    let response = ensure_success(response).await?;
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| RemoteError::Malformed(e.to_string()))
}
