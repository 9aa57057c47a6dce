//! HTTP client for the Gemini `generateContent` endpoint.

use tracing::{debug, warn};

use super::model::{GenerateContentRequest, GenerateContentResponse};
use super::prompt::HEALTH_CHECK_TEXT;
use super::GeminiError;
use crate::config::UpstreamConfig;

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    api_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &UpstreamConfig) -> Result<Self, GeminiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GeminiError::Client)?;

        if config.api_key.is_none() {
            warn!("GEMINI_API_KEY is not set, upstream calls will be rejected");
        }

        Ok(Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// Send `prompt` as a single-turn request and decode the reply.
    pub async fn generate(&self, prompt: &str) -> Result<GenerateContentResponse, GeminiError> {
        debug!(prompt_len = prompt.len(), "Calling Gemini API");
        let response = self.send(prompt).await?;

        let body: GenerateContentResponse =
            response.json().await.map_err(GeminiError::decode)?;

        debug!(candidates = body.candidates.len(), "Gemini API responded");
        Ok(body)
    }

    /// Check that the endpoint accepts a minimal request.
    pub async fn ping(&self) -> Result<(), GeminiError> {
        self.send(HEALTH_CHECK_TEXT).await?;
        Ok(())
    }

    async fn send(&self, text: &str) -> Result<reqwest::Response, GeminiError> {
        let mut request = self
            .client
            .post(&self.api_url)
            .json(&GenerateContentRequest::from_text(text));
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await.map_err(GeminiError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(GeminiError::status(status.as_u16(), &body));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/generate", addr)
    }

    fn client_for(url: String, key: Option<&str>) -> GeminiClient {
        GeminiClient::new(&UpstreamConfig::new(url, key.map(str::to_string))).unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_key_and_prompt() {
        let router = Router::new().route(
            "/generate",
            post(
                |Query(params): Query<HashMap<String, String>>, Json(body): Json<Value>| async move {
                    let text = body["contents"][0]["parts"][0]["text"].clone();
                    Json(json!({
                        "candidates": [{"content": {"parts": [{
                            "text": format!("{}|{}", params.get("key").cloned().unwrap_or_default(), text.as_str().unwrap_or_default())
                        }]}}]
                    }))
                },
            ),
        );
        let client = client_for(spawn(router).await, Some("secret"));

        let response = client.generate("hello").await.unwrap();
        assert_eq!(response.first_text(), Some("secret|hello"));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route(
            "/generate",
            post(|| async { (StatusCode::FORBIDDEN, "API key not valid") }),
        );
        let client = client_for(spawn(router).await, None);

        let err = client.ping().await.unwrap_err();
        assert!(matches!(err, GeminiError::Status { status: 403, .. }));
        assert_eq!(err.to_string(), "upstream returned HTTP 403: API key not valid");
    }

    #[tokio::test]
    async fn test_ping_accepts_success() {
        let router = Router::new().route(
            "/generate",
            post(|| async { Json(json!({"candidates": []})) }),
        );
        let client = client_for(spawn(router).await, Some("k"));
        assert!(client.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_hides_key() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/generate", addr), Some("top-secret"));
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, GeminiError::Transport(_)));
        assert!(!err.to_string().contains("top-secret"));
    }

    #[tokio::test]
    async fn test_configured_timeout_is_applied() {
        let router = Router::new().route(
            "/generate",
            post(|| async {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                Json(json!({"candidates": []}))
            }),
        );
        let config = UpstreamConfig::new(spawn(router).await, Some("k".into()))
            .with_timeout(Some(std::time::Duration::from_millis(200)));
        let client = GeminiClient::new(&config).unwrap();

        let err = client.generate("hello").await.unwrap_err();
        let GeminiError::Transport(inner) = err else {
            panic!("expected transport error, got {:?}", err);
        };
        assert!(inner.is_timeout());
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let router = Router::new().route("/generate", post(|| async { "not json" }));
        let client = client_for(spawn(router).await, Some("k"));
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, GeminiError::Decode(_)));
    }
}
