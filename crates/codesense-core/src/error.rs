//! Centralized error types for CodeSense.

use thiserror::Error;

use crate::analysis::extract::ExtractError;
use crate::analysis::validate::ValidationError;
use crate::gemini::GeminiError;

/// Failure class of an error, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable.
    ClientInput,
    /// The upstream API could not be reached or rejected the call.
    UpstreamTransport,
    /// The upstream API answered, but not with a usable analysis.
    UpstreamContent,
    /// Anything else.
    Internal,
}

/// Main error type for CodeSense operations.
///
/// The `Display` text of each variant is the message returned to API callers.
#[derive(Error, Debug)]
pub enum CodesenseError {
    #[error("No code provided")]
    NoCode,

    #[error("Invalid code provided")]
    InvalidCode,

    #[error("API request failed: {0}")]
    Upstream(#[from] GeminiError),

    #[error("No response from Gemini API")]
    NoResponse,

    #[error("Failed to generate valid analysis")]
    InvalidAnalysis(#[source] ExtractError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("An error occurred: {0}")]
    Internal(String),
}

/// Result type for CodeSense operations.
pub type CodesenseResult<T> = Result<T, CodesenseError>;

impl CodesenseError {
    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NoCode | Self::InvalidCode => ErrorKind::ClientInput,
            Self::Upstream(_) => ErrorKind::UpstreamTransport,
            Self::NoResponse | Self::InvalidAnalysis(_) | Self::Validation(_) => {
                ErrorKind::UpstreamContent
            }
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<ExtractError> for CodesenseError {
    fn from(err: ExtractError) -> Self {
        Self::InvalidAnalysis(err)
    }
}
