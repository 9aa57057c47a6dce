//! Mapping from domain errors to HTTP responses.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codesense_core::{CodesenseError, ErrorKind};
use serde_json::json;
use tracing::error;

/// Error returned by route handlers, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub CodesenseError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind())
    }
}

/// HTTP status for each failure class.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ClientInput => StatusCode::BAD_REQUEST,
        ErrorKind::UpstreamTransport => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::UpstreamContent | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<CodesenseError> for ApiError {
    fn from(err: CodesenseError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Turn a handler panic into the generic internal error response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError(CodesenseError::internal(detail)).into_response()
}
