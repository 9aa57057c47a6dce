//! Upstream configuration.
//!
//! Read once at startup and shared read-only afterwards.

use std::time::Duration;

use tracing::warn;

/// Default Gemini `generateContent` endpoint.
pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

pub const ENV_API_URL: &str = "GEMINI_API_URL";
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_UPSTREAM_TIMEOUT: &str = "CODESENSE_UPSTREAM_TIMEOUT";

/// Where and how to reach the Gemini API.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Full `generateContent` URL; the key is appended as a query parameter.
    pub api_url: String,
    pub api_key: Option<String>,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }
}

impl UpstreamConfig {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the configuration from `GEMINI_API_URL`, `GEMINI_API_KEY` and
    /// `CODESENSE_UPSTREAM_TIMEOUT` (seconds).
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup(ENV_API_URL)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string());
        let api_key = lookup(ENV_API_KEY);

        let timeout = lookup(ENV_UPSTREAM_TIMEOUT).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                warn!(value = %raw, "Ignoring invalid {}", ENV_UPSTREAM_TIMEOUT);
                None
            }
        });

        Self::new(api_url, api_key).with_timeout(timeout)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
