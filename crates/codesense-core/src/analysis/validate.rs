//! Shallow shape check for analysis documents.
//!
//! Only the six top-level sections and the corrections payload are checked.
//! Nested scores and findings are passed through as the model wrote them.

use serde_json::Value;
use thiserror::Error;

/// Top-level sections every analysis must carry.
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "structureAnalysis",
    "implementationReview",
    "bestPractices",
    "recommendations",
    "metrics",
    "corrections",
];

/// Reason an analysis document was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required sections in analysis result")]
    MissingSections,

    #[error("Invalid corrections.hasCorrections field")]
    InvalidHasCorrections,

    #[error("Missing correctedCode when hasCorrections is true")]
    MissingCorrectedCode,

    #[error("Invalid corrections.changes field")]
    InvalidChanges,
}

/// Check that `result` has the fixed analysis shape.
pub fn validate_analysis(result: &Value) -> Result<(), ValidationError> {
    let has_all = REQUIRED_SECTIONS
        .iter()
        .all(|section| result.get(section).is_some());
    if !has_all {
        return Err(ValidationError::MissingSections);
    }

    let corrections = &result["corrections"];
    let has_corrections = corrections
        .get("hasCorrections")
        .and_then(Value::as_bool)
        .ok_or(ValidationError::InvalidHasCorrections)?;

    if has_corrections {
        let corrected = corrections.get("correctedCode").and_then(Value::as_str);
        if corrected.is_none_or(str::is_empty) {
            return Err(ValidationError::MissingCorrectedCode);
        }
        if !corrections.get("changes").is_some_and(Value::is_array) {
            return Err(ValidationError::InvalidChanges);
        }
    }

    Ok(())
}
