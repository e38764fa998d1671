use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;
use tracing::error;

/// Failures in the persistence layer.
#[derive(Debug, ThisError)]
pub enum StoreError {
    /// The database was unreachable (or its schema could not be applied) at
    /// startup. Fatal: the process must not serve traffic in this state.
    #[error("store startup failed: {0}")]
    Startup(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store actor's mailbox failed (actor dead or reply dropped).
    #[error("store actor error: {0}")]
    Rpc(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> axum::response::Response {
        // Request-time store failures are all the caller's 500; details stay
        // in the log.
        error!("store failure while handling request: {self}");
        let body = ApiErrorObject {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal server error occurred.".to_string(),
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiErrorBody { inner: body }),
        )
            .into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
