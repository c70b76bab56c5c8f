//! Gemini payload types shared by every gateway operation.
//!
//! Field spelling follows the backend's snake_case wire contract
//! (`inline_data`, `mime_type`); requests are built through the constructors,
//! which guarantee at least one content block with at least one part.

use serde::{Deserialize, Serialize};

/// One ordered segment of a content block: prompt text or an inline base64
/// payload. Exactly one payload kind per part.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// Base64 inline payload for image-bearing requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    /// Passed through exactly as supplied by the upload; not validated here.
    pub mime_type: String,
    pub data: String,
}

/// Ordered group of parts forming one multimodal message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Wrap a prompt in a single text part.
    pub fn from_text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.into(),
                }],
            }],
        }
    }

    /// Build an image-analysis request: the instructional text part first,
    /// then the inline payload encoded as standard base64.
    pub fn with_inline_image(prompt: impl Into<String>, mime_type: &str, bytes: &[u8]) -> Self {
        use base64::Engine as _;
        let data = base64::engine::general_purpose::STANDARD.encode(bytes);

        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.into(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data,
                        },
                    },
                ],
            }],
        }
    }
}

/// Top-level `generateContent` response envelope.
///
/// `candidates` and the nested fields default to empty so an envelope that
/// omits them reaches the extractor fallback instead of failing decode.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One complete generated alternative.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    ///
    /// Later candidates and parts are deliberately ignored; the backend may
    /// return more, but this gateway never consumes them.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_text_round_trips_the_prompt() {
        let request = GenerateContentRequest::from_text("Describe this property");

        assert_eq!(request.contents.len(), 1);
        match &request.contents[0].parts[..] {
            [Part::Text { text }] => assert_eq!(text, "Describe this property"),
            other => panic!("unexpected parts: {:?}", other),
        }
    }

    #[test]
    fn test_text_request_wire_shape() {
        let request = GenerateContentRequest::from_text("hello");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "contents": [ { "parts": [ { "text": "hello" } ] } ]
            })
        );
    }

    #[test]
    fn test_image_request_orders_text_before_inline_data() {
        use base64::Engine as _;

        let bytes = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A];
        let request = GenerateContentRequest::with_inline_image("Analyze this", "image/png", &bytes);

        assert_eq!(request.contents.len(), 1);
        let parts = &request.contents[0].parts;
        assert_eq!(parts.len(), 2);
        match &parts[0] {
            Part::Text { text } => assert_eq!(text, "Analyze this"),
            other => panic!("expected text first, got {:?}", other),
        }
        match &parts[1] {
            Part::InlineData { inline_data } => {
                assert_eq!(inline_data.mime_type, "image/png");
                let decoded = base64::engine::general_purpose::STANDARD
                    .decode(&inline_data.data)
                    .unwrap();
                assert_eq!(decoded, bytes);
            }
            other => panic!("expected inline data second, got {:?}", other),
        }
    }

    #[test]
    fn test_image_request_wire_shape_uses_snake_case_names() {
        let request = GenerateContentRequest::with_inline_image("look", "image/jpeg", &[0xFF]);
        let body = serde_json::to_string(&request).unwrap();

        assert!(body.contains("\"inline_data\""));
        assert!(body.contains("\"mime_type\":\"image/jpeg\""));
        assert!(!body.contains("inlineData"));
    }

    #[test]
    fn test_first_text_reads_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first" }, { "text": "second" } ] } },
                { "content": { "parts": [ { "text": "other candidate" } ] } }
            ]
        }))
        .unwrap();

        assert_eq!(response.first_text(), Some("first"));
    }

    #[test]
    fn test_first_text_skips_inline_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [ { "content": { "parts": [
                { "inline_data": { "mime_type": "image/png", "data": "AA==" } },
                { "text": "after the image" }
            ] } } ]
        }))
        .unwrap();

        assert_eq!(response.first_text(), Some("after the image"));
    }

    #[test]
    fn test_first_text_is_none_without_text_parts() {
        let empty: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert_eq!(empty.first_text(), None);

        let missing: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(missing.first_text(), None);

        let image_only: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [ { "content": { "parts": [
                { "inline_data": { "mime_type": "image/png", "data": "AA==" } }
            ] } } ]
        }))
        .unwrap();
        assert_eq!(image_only.first_text(), None);
    }
}
