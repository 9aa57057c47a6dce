//! Health check endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

pub const PING_OK_MESSAGE: &str = "Backend is running and Gemini API is accessible";

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: String,
}

/// Report whether the Gemini API currently accepts requests.
pub async fn ping(State(state): State<AppState>) -> (StatusCode, Json<PingResponse>) {
    match state.reviewer.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(PingResponse {
                status: "ok",
                message: PING_OK_MESSAGE.to_string(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Gemini API health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(PingResponse {
                    status: "error",
                    message: e.to_string(),
                }),
            )
        }
    }
}
