//! Gemini API client.
//!
//! One `generateContent` call per review, plus a minimal call used as a
//! reachability probe.

pub mod client;
pub mod model;
pub mod prompt;

use thiserror::Error;

pub use client::GeminiClient;
pub use model::{GenerateContentRequest, GenerateContentResponse};

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

/// Failure talking to the Gemini API.
///
/// Transport errors never carry the request URL, since it holds the API key.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid upstream response: {0}")]
    Decode(reqwest::Error),
}

impl GeminiError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }

    pub(crate) fn decode(err: reqwest::Error) -> Self {
        Self::Decode(err.without_url())
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_ERROR_BODY) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_body_is_truncated() {
        let long = "x".repeat(MAX_ERROR_BODY + 100);
        let GeminiError::Status { status, body } = GeminiError::status(500, &long) else {
            panic!("expected status error");
        };
        assert_eq!(status, 500);
        assert_eq!(body.len(), MAX_ERROR_BODY + 3);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_status_body_is_trimmed() {
        let err = GeminiError::status(400, "  bad request\n");
        assert_eq!(err.to_string(), "upstream returned HTTP 400: bad request");
    }
}
