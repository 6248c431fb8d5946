//! Shared handling of backend HTTP responses.

use reqwest::Response;
use tracing::error;
use weaver_error::{BackendError, BackendErrorKind, WeaverResult};

/// Pass successful responses through; turn anything else into a backend error
/// carrying the status and the response body verbatim.
pub(crate) async fn ensure_success(
    provider: &'static str,
    response: Response,
) -> WeaverResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    error!(provider, status = %status, error = %error_text, "API error");

    Err(BackendError::new(
        provider,
        BackendErrorKind::from_status(status.as_u16(), error_text),
    )
    .into())
}

/// Map a transport failure into a backend error.
pub(crate) fn request_failed(provider: &'static str, err: reqwest::Error) -> BackendError {
    error!(provider, error = ?err, "HTTP request failed");
    BackendError::new(provider, BackendErrorKind::Request(err.to_string()))
}
