//! Best-effort recovery of a JSON object from model output.
//!
//! Models are asked for bare JSON but often wrap it in a markdown fence or
//! add a sentence before or after it. The extractor tries a direct parse,
//! then the body of a ```` ```json ```` fence, then scans for balanced
//! objects and keeps the largest one that parses. Braces inside JSON string
//! literals are ignored while scanning, so corrected code containing `{`
//! or `}` does not throw the match off.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

const FENCE_MARKER: &str = "```json";
const FENCE_OPEN: &str = "```json\n";
const FENCE_CLOSE: &str = "\n```";

/// Why no JSON object could be recovered from a response.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("empty response text")]
    Empty,

    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Extract the JSON object contained in `text`.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }

    if let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(text) {
        return Ok(Value::Object(obj));
    }

    if let Some(obj) = fenced_object(text) {
        return Ok(Value::Object(obj));
    }

    let cleaned = text.replace(FENCE_OPEN, "").replace(FENCE_CLOSE, "");
    let mut last_error = None;
    let mut largest: Option<(usize, Map<String, Value>)> = None;

    let mut cursor = 0;
    while let Some(found) = cleaned[cursor..].find('{') {
        let start = cursor + found;
        // An object that never closes swallows every brace after it.
        let Some(end) = matching_brace(&cleaned, start) else {
            break;
        };
        match serde_json::from_str::<Map<String, Value>>(&cleaned[start..=end]) {
            Ok(obj) => {
                let len = end - start;
                if largest.as_ref().is_none_or(|(best, _)| len > *best) {
                    largest = Some((len, obj));
                }
            }
            Err(e) => last_error = Some(e),
        }
        cursor = end + 1;
    }

    if let Some((len, obj)) = largest {
        debug!(len, "Recovered JSON object from model output");
        return Ok(Value::Object(obj));
    }

    // Unbalanced quoting defeats the scanner; fall back to the outermost braces.
    if let (Some(start), Some(end)) = (cleaned.find('{'), cleaned.rfind('}')) {
        if end > start {
            return match serde_json::from_str::<Map<String, Value>>(&cleaned[start..=end]) {
                Ok(obj) => Ok(Value::Object(obj)),
                Err(e) => Err(ExtractError::Parse(last_error.unwrap_or(e))),
            };
        }
    }

    Err(last_error.map_or(ExtractError::NoJsonObject, ExtractError::Parse))
}

/// Object inside the first ```` ```json ```` fence, if it parses.
fn fenced_object(text: &str) -> Option<Map<String, Value>> {
    let start = text.find(FENCE_MARKER)? + FENCE_MARKER.len();
    let body = &text[start..];
    let end = body.find("```")?;
    serde_json::from_str(body[..end].trim()).ok()
}

/// Index of the `}` closing the object opened at `start`, if any.
fn matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
