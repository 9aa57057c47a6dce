//! Typed view of an analysis document.
//!
//! Every field is lenient: the model is free to omit or misname parts of
//! the schema, so missing values fall back to defaults instead of failing
//! deserialization. The HTTP API never round-trips through these types;
//! they exist for rendering.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Complete analysis returned by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub structure_analysis: StructureAnalysis,
    pub implementation_review: ImplementationReview,
    pub best_practices: BestPractices,
    pub recommendations: Recommendations,
    pub metrics: Metrics,
    pub corrections: Corrections,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructureAnalysis {
    pub architecture: Architecture,
    pub code_quality: CodeQuality,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Architecture {
    pub score: f64,
    pub findings: Vec<Finding>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Finding {
    pub aspect: String,
    pub evaluation: String,
    pub recommendation: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeQuality {
    pub cyclomatic_complexity: String,
    pub documentation_score: f64,
    pub cohesion_score: f64,
    /// Free-form; the prompt leaves the element shape open.
    pub findings: Vec<Value>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImplementationReview {
    pub error_handling: ErrorHandling,
    pub performance: Performance,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorHandling {
    pub score: f64,
    pub issues: Vec<Issue>,
    pub explanation: String,
}

/// An issue with a suggested fix. Also used for security vulnerabilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Issue {
    pub issue: String,
    pub recommendation: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    pub time_complexity: String,
    pub space_complexity: String,
    pub bottlenecks: Vec<Bottleneck>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bottleneck {
    pub function: String,
    pub issue: String,
    pub recommendation: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BestPractices {
    pub code_style: CodeStyle,
    pub security: Security,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeStyle {
    pub score: f64,
    pub violations: Vec<Value>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Security {
    pub score: f64,
    pub vulnerabilities: Vec<Issue>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendations {
    pub priority: String,
    pub items: Vec<RecommendationItem>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationItem {
    pub category: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub overall_score: f64,
    pub quality_score: f64,
    pub security_score: f64,
    pub performance_score: f64,
    pub maintainability_score: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Corrections {
    pub has_corrections: bool,
    pub corrected_code: String,
    pub changes: Vec<Change>,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Change {
    #[serde(rename = "type")]
    pub change_type: String,
    pub location: String,
    pub original: String,
    pub correction: String,
    pub explanation: String,
}

/// Coarse rating of a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: f64) -> Self {
        if score >= 80.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

impl Metrics {
    /// Labelled scores in display order.
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("Overall", self.overall_score),
            ("Quality", self.quality_score),
            ("Security", self.security_score),
            ("Performance", self.performance_score),
            ("Maintainability", self.maintainability_score),
        ]
    }
}

impl AnalysisResult {
    /// Build the typed view from a validated document.
    pub fn from_value(value: &Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }
}
