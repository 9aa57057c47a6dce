//! The review pipeline: validate input, call Gemini, extract the analysis,
//! check its shape.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analysis::{extract_json, validate_analysis};
use crate::config::UpstreamConfig;
use crate::error::{CodesenseError, CodesenseResult};
use crate::gemini::prompt::build_review_prompt;
use crate::gemini::{GeminiClient, GeminiError};

/// Validated body of a review request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub code: String,
}

impl ReviewRequest {
    /// Parse a raw request body.
    ///
    /// A body that is not a JSON object, or has no `code` key, is
    /// `NoCode`. A `code` that is not a string with visible content is
    /// `InvalidCode`.
    pub fn from_json_bytes(body: &[u8]) -> CodesenseResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            debug!(error = %e, "Request body is not JSON");
            CodesenseError::NoCode
        })?;

        match value.get("code") {
            None => Err(CodesenseError::NoCode),
            Some(Value::String(code)) => Self::new(code.clone()),
            Some(_) => Err(CodesenseError::InvalidCode),
        }
    }

    pub fn new(code: String) -> CodesenseResult<Self> {
        if code.trim().is_empty() {
            return Err(CodesenseError::InvalidCode);
        }
        Ok(Self { code })
    }
}

/// Runs reviews against the Gemini API.
#[derive(Clone)]
pub struct Reviewer {
    client: GeminiClient,
}

impl Reviewer {
    pub fn new(config: &UpstreamConfig) -> Result<Self, GeminiError> {
        Ok(Self::from_client(GeminiClient::new(config)?))
    }

    pub fn from_client(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Review `request.code` and return the validated analysis document.
    pub async fn review(&self, request: &ReviewRequest) -> CodesenseResult<Value> {
        let prompt = build_review_prompt(&request.code);
        let response = self.client.generate(&prompt).await?;

        if response.candidates.is_empty() {
            warn!("Gemini API returned no candidates");
            return Err(CodesenseError::NoResponse);
        }
        let text = response.first_text().ok_or_else(|| {
            warn!("First Gemini candidate carries no text");
            CodesenseError::NoResponse
        })?;

        let analysis = extract_json(text).map_err(|e| {
            warn!(error = %e, "Could not extract analysis from model output");
            CodesenseError::from(e)
        })?;

        validate_analysis(&analysis).map_err(|e| {
            warn!(reason = %e, "Analysis failed shape validation");
            CodesenseError::from(e)
        })?;

        info!(code_len = request.code.len(), "Review completed");
        Ok(analysis)
    }

    /// Check that the Gemini API is reachable and accepts requests.
    pub async fn ping(&self) -> Result<(), GeminiError> {
        self.client.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ExtractError, ValidationError};
    use crate::error::ErrorKind;
    use axum::{routing::post, Json, Router};
    use serde_json::json;

    fn analysis() -> Value {
        json!({
            "structureAnalysis": {"architecture": {"score": 70, "findings": [], "explanation": "flat"}},
            "implementationReview": {"errorHandling": {"score": 40, "issues": []}},
            "bestPractices": {"codeStyle": {"score": 90, "violations": []}},
            "recommendations": {"priority": "low", "items": []},
            "metrics": {"overallScore": 65, "qualityScore": 60},
            "corrections": {"hasCorrections": false, "correctedCode": "", "changes": []}
        })
    }

    async fn reviewer_answering(text: String) -> Reviewer {
        let router = Router::new().route(
            "/generate",
            post(move || {
                let text = text.clone();
                async move { Json(json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})) }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Reviewer::new(&UpstreamConfig::new(format!("http://{}/generate", addr), Some("k".into())))
            .unwrap()
    }

    fn request() -> ReviewRequest {
        ReviewRequest::new("def f(): pass".to_string()).unwrap()
    }

    #[test]
    fn test_request_parsing() {
        assert_eq!(
            ReviewRequest::from_json_bytes(br#"{"code": "x = 1"}"#).unwrap().code,
            "x = 1"
        );
        assert!(matches!(
            ReviewRequest::from_json_bytes(br#"{"source": "x"}"#),
            Err(CodesenseError::NoCode)
        ));
        assert!(matches!(
            ReviewRequest::from_json_bytes(b"not json"),
            Err(CodesenseError::NoCode)
        ));
        assert!(matches!(
            ReviewRequest::from_json_bytes(b"[]"),
            Err(CodesenseError::NoCode)
        ));
        let invalid: [&[u8]; 4] = [
            br#"{"code": ""}"#,
            br#"{"code": " \n\t"}"#,
            br#"{"code": 42}"#,
            br#"{"code": null}"#,
        ];
        for body in invalid {
            assert!(matches!(
                ReviewRequest::from_json_bytes(body),
                Err(CodesenseError::InvalidCode)
            ));
        }
    }

    #[test]
    fn test_code_is_not_trimmed() {
        let request = ReviewRequest::from_json_bytes(br#"{"code": "  x = 1\n"}"#).unwrap();
        assert_eq!(request.code, "  x = 1\n");
    }

    #[tokio::test]
    async fn test_review_returns_analysis_unchanged() {
        let text = serde_json::to_string(&analysis()).unwrap();
        let reviewer = reviewer_answering(text).await;
        assert_eq!(reviewer.review(&request()).await.unwrap(), analysis());
    }

    #[tokio::test]
    async fn test_review_unwraps_fenced_output() {
        let text = format!(
            "Here is my review:\n```json\n{}\n```",
            serde_json::to_string_pretty(&analysis()).unwrap()
        );
        let reviewer = reviewer_answering(text).await;
        assert_eq!(reviewer.review(&request()).await.unwrap(), analysis());
    }

    #[tokio::test]
    async fn test_review_rejects_unparsable_output() {
        let reviewer = reviewer_answering("I could not review this.".to_string()).await;
        let err = reviewer.review(&request()).await.unwrap_err();
        assert!(matches!(err, CodesenseError::InvalidAnalysis(ExtractError::NoJsonObject)));
        assert_eq!(err.kind(), ErrorKind::UpstreamContent);
    }

    #[tokio::test]
    async fn test_review_rejects_incomplete_analysis() {
        let mut doc = analysis();
        doc.as_object_mut().unwrap().remove("metrics");
        let reviewer = reviewer_answering(doc.to_string()).await;
        let err = reviewer.review(&request()).await.unwrap_err();
        assert!(matches!(err, CodesenseError::Validation(ValidationError::MissingSections)));
    }
}
