use crate::error::{Result, ShopError};
use reqwest::{Client, Response};
use std::time::Duration;

/// Builds the HTTP client shared by every provider adapter.
///
/// The timeout bounds each outbound call so a stalled provider cannot hold a
/// request open indefinitely.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ShopError::UnexpectedError(format!("Failed to build HTTP client: {e}")))
}

pub(crate) fn transport_error(provider: &'static str, error: reqwest::Error) -> ShopError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else {
        error.to_string()
    };
    ShopError::provider(provider, message)
}

/// Passes successful responses through; turns anything else into a `ProviderError`
/// carrying the provider's body (JSON when it parses, raw text otherwise).
pub(crate) async fn check_status(provider: &'static str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let details = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
    Err(ShopError::ProviderError {
        provider,
        message: format!("provider responded with {status}"),
        details: Some(details),
    })
}
