//! Parsing of free-text LLM replies that should contain a JSON object.

use serde_json::Value;
use thiserror::Error;

/// The reply was not JSON after fence stripping. Keeps the raw reply for diagnosis.
#[derive(Debug, Error)]
#[error("{source} - Raw response: {raw}")]
pub struct MalformedResponseError {
    pub source: serde_json::Error,
    pub raw: String,
}

/// Strips ```` ```json ... ``` ```` or ```` ``` ... ``` ```` fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        text = stripped.strip_prefix("json").unwrap_or(stripped).trim_start();
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped.trim_end();
    }
    text
}

/// Strips fences and parses the remainder as JSON.
pub fn parse_json_reply(raw: &str) -> Result<Value, MalformedResponseError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|source| MalformedResponseError {
        source,
        raw: raw.to_string(),
    })
}
