//! Wire types for the Gemini `generateContent` endpoint.
//!
//! The reply keeps every field optional that the service may omit:
//! a filtered reply arrives as HTTP 200 with no candidates (plus a
//! `promptFeedback.blockReason`) or with a candidate whose `content` is
//! missing. The conversion into [`GenerationResponse`] preserves that
//! distinction instead of flattening it into an empty string.

use fortune_domain::{GeneratedCandidate, GenerationRequest, GenerationResponse};
use fortune_application::GatewayError;
use serde::{Deserialize, Serialize};

// ==================== Request ====================

#[derive(Debug, Serialize)]
pub(super) struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

impl<'a> GenerateContentBody<'a> {
    pub(super) fn from_request(request: &'a GenerationRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.params.temperature,
                max_output_tokens: request.params.max_output_tokens,
            },
        }
    }
}

// ==================== Reply ====================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentReply {
    #[serde(default)]
    candidates: Vec<ReplyCandidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyCandidate {
    content: Option<ReplyContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentReply {
    pub(super) fn into_domain(self) -> GenerationResponse {
        let candidates = self
            .candidates
            .into_iter()
            .map(|candidate| {
                let content = candidate.content.and_then(|content| {
                    let joined: String = content
                        .parts
                        .into_iter()
                        .filter_map(|part| part.text)
                        .collect();
                    if joined.trim().is_empty() {
                        None
                    } else {
                        Some(joined)
                    }
                });
                GeneratedCandidate {
                    content,
                    finish_reason: candidate.finish_reason,
                }
            })
            .collect();

        GenerationResponse {
            candidates,
            block_reason: self.prompt_feedback.and_then(|f| f.block_reason),
        }
    }
}

// ==================== Error mapping ====================

/// Map a non-2xx status to a [`GatewayError`], keeping a body excerpt for
/// diagnostics.
pub(super) fn status_to_error(status: u16, body: &str) -> GatewayError {
    let message = body_excerpt(body);
    match status {
        408 | 504 => GatewayError::Timeout,
        _ => GatewayError::Status { status, message },
    }
}

/// First line of the body, bounded, so error messages stay log-friendly
fn body_excerpt(body: &str) -> String {
    const MAX: usize = 200;
    let line = body.lines().next().unwrap_or("").trim();
    let mut end = line.len().min(MAX);
    while end > 0 && !line.is_char_boundary(end) {
        end -= 1;
    }
    line[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortune_domain::GenerationParams;

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest::new("tell a fortune", GenerationParams::default());
        let body = GenerateContentBody::from_request(&request);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "tell a fortune");
        assert_eq!(json["generationConfig"]["temperature"], 0.9);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 200);
    }

    #[test]
    fn test_reply_with_content() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "{\"fortune\": \"x\"}" }] },
                "finishReason": "STOP"
            }]
        }"#;
        let reply: GenerateContentReply = serde_json::from_str(raw).unwrap();
        let response = reply.into_domain();

        assert_eq!(response.first_content(), Some("{\"fortune\": \"x\"}"));
        assert!(response.block_reason.is_none());
    }

    #[test]
    fn test_reply_with_multiple_parts_is_joined() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "half " }, { "text": "and half" }] },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerationResponse =
            serde_json::from_str::<GenerateContentReply>(raw).unwrap().into_domain();
        assert_eq!(response.first_content(), Some("half and half"));
    }

    #[test]
    fn test_filtered_reply_is_semantically_empty() {
        // HTTP 200 with no candidates and a block reason
        let raw = r#"{
            "promptFeedback": { "blockReason": "PROHIBITED_CONTENT" }
        }"#;
        let response: GenerationResponse =
            serde_json::from_str::<GenerateContentReply>(raw).unwrap().into_domain();

        assert_eq!(response.first_content(), None);
        assert_eq!(
            response.block_reason.as_deref(),
            Some("PROHIBITED_CONTENT")
        );
    }

    #[test]
    fn test_candidate_without_content_stays_absent() {
        // A SAFETY-stopped candidate carries a finishReason but no content
        let raw = r#"{
            "candidates": [{ "finishReason": "SAFETY" }]
        }"#;
        let response: GenerationResponse =
            serde_json::from_str::<GenerateContentReply>(raw).unwrap().into_domain();

        assert_eq!(response.first_content(), None);
        assert_eq!(
            response.candidates[0].finish_reason.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_whitespace_only_parts_become_absent_content() {
        let raw = r#"{
            "candidates": [{
                "content": { "parts": [{ "text": "   " }] }
            }]
        }"#;
        let response: GenerationResponse =
            serde_json::from_str::<GenerateContentReply>(raw).unwrap().into_domain();
        assert!(response.candidates[0].content.is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_to_error(429, "quota exceeded"),
            GatewayError::Status { status: 429, .. }
        ));
        assert!(matches!(status_to_error(504, ""), GatewayError::Timeout));

        let err = status_to_error(500, "boom\nsecond line");
        match err {
            GatewayError::Status { message, .. } => assert_eq!(message, "boom"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
