//! Analysis documents: recovery from model output, shape validation and a
//! typed view for rendering.

pub mod extract;
pub mod model;
pub mod validate;

pub use extract::{extract_json, ExtractError};
pub use model::AnalysisResult;
pub use validate::{validate_analysis, ValidationError, REQUIRED_SECTIONS};
