//! CodeSense Core Library
//!
//! Sends code to the Gemini API for review and turns the model's free-text
//! answer into a validated analysis document.

pub mod analysis;
pub mod config;
pub mod error;
pub mod gemini;
pub mod review;

pub use config::UpstreamConfig;
pub use error::{CodesenseError, CodesenseResult, ErrorKind};
pub use gemini::GeminiClient;
pub use review::{ReviewRequest, Reviewer};
