//! Best-effort recovery of JSON objects from model replies
//!
//! Structured operations only *request* JSON through their prompt
//! instructions; the backend is free to wrap the object in a Markdown code
//! fence or to answer in prose. Normalization therefore never errors:
//! non-object text becomes an empty mapping, and a brace-wrapped reply that
//! still fails to parse becomes a single diagnostic entry.

use serde_json::{Map, Value};

pub const PARSE_FAILURE_KEY: &str = "error";
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse AI response";

/// Strip a wrapping Markdown code fence, and its optional `json` language
/// tag, from a model reply.
///
/// Only markers at the edges are removed; a literal "json" inside the
/// payload stays untouched.
fn strip_code_fences(text: &str) -> &str {
    let mut inner = text.trim();

    if let Some(rest) = inner.strip_prefix("```") {
        let rest = rest.trim_start();
        let rest = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
        inner = rest.trim_start();
        if let Some(body) = inner.strip_suffix("```") {
            inner = body.trim_end();
        }
    } else if let Some(rest) = inner.strip_prefix('`') {
        inner = rest.strip_suffix('`').unwrap_or(rest).trim();
    }

    inner
}

/// Recover a JSON object from `text`, degrading instead of failing.
pub fn normalize_to_object(text: &str) -> Map<String, Value> {
    let cleaned = strip_code_fences(text);

    if !(cleaned.starts_with('{') && cleaned.ends_with('}')) {
        return Map::new();
    }

    match serde_json::from_str::<Map<String, Value>>(cleaned) {
        Ok(object) => object,
        Err(e) => {
            tracing::warn!("Discarding unparseable structured reply: {}", e);
            let mut object = Map::new();
            object.insert(
                PARSE_FAILURE_KEY.to_string(),
                Value::String(PARSE_FAILURE_MESSAGE.to_string()),
            );
            object
        }
    }
}
