//! Code review endpoint.

use axum::{body::Bytes, extract::State, Json};
use codesense_core::ReviewRequest;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Review the submitted code and return the validated analysis.
///
/// The body is read raw so malformed JSON gets the same `{"error": ...}`
/// envelope as every other failure.
pub async fn review(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let request = ReviewRequest::from_json_bytes(&body)?;
    debug!(code_len = request.code.len(), "Review requested");

    let analysis = state.reviewer.review(&request).await?;
    Ok(Json(analysis))
}
