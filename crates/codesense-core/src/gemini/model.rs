//! Gemini `generateContent` request and response types.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

/// Content block, used both in requests and in candidates.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<Part>,
}

/// Text part within a content block.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body from `generateContent`.
#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
}

/// One alternative answer from the model.
#[derive(Debug, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Gemini sends `null` for lists it has nothing to put in.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.into()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_text("test")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "test"}]}]}));
    }

    #[test]
    fn test_first_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}], "role": "model"},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "other"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 10}
        }))
        .unwrap();
        assert_eq!(response.first_text(), Some("first"));
    }

    #[test]
    fn test_missing_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_null_lists_read_as_empty() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": null})).unwrap();
        assert!(response.candidates.is_empty());

        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": null}}]})).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_candidate_without_text() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.first_text(), None);
    }
}
