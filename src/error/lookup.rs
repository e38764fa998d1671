use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error as ThisError;
use tracing::warn;

/// Failures while looking up a character against the upstream API.
#[derive(Debug, ThisError)]
pub enum LookupError {
    /// Transport-level failure (DNS, connect, timeouts, etc).
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream status: {0}")]
    UpstreamStatus(StatusCode),

    /// Upstream answered 2xx but the body was not well-formed JSON.
    #[error("malformed upstream payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl IntoResponse for LookupError {
    fn into_response(self) -> axum::response::Response {
        // The route contract pins the body: every lookup failure is the same
        // opaque 500 to the caller.
        warn!("character lookup failed: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error.").into_response()
    }
}
