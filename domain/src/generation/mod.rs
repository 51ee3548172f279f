//! Generation request and response value objects
//!
//! These model the boundary with the remote text-generation service in
//! domain terms. The response keeps per-candidate content `Option`al so that
//! "the service answered but returned nothing usable" (e.g. a safety filter
//! fired) is distinguishable from "content present" at the type level,
//! instead of relying on null/length checks downstream.

use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_output_tokens: 200,
        }
    }
}

/// One generation request: a prompt plus parameters.
///
/// Opaque to the fallback loop: every candidate attempt receives it
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub params: GenerationParams,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            prompt: prompt.into(),
            params,
        }
    }
}

/// One generated candidate within a response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCandidate {
    /// Generated text, `None` when the service withheld content
    pub content: Option<String>,
    /// Service-side finish classification (e.g. `STOP`, `SAFETY`)
    pub finish_reason: Option<String>,
}

/// A transport-successful response from the generation service.
///
/// May still be semantically empty: zero candidates, or candidates whose
/// content was withheld.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    pub candidates: Vec<GeneratedCandidate>,
    /// Prompt-level rejection classification, diagnostic only
    pub block_reason: Option<String>,
}

impl GenerationResponse {
    /// First non-blank generated content, if any.
    ///
    /// This is the semantic-validity check the fallback loop runs on every
    /// transport-successful response.
    pub fn first_content(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_deref())
            .map(str::trim)
            .find(|text| !text.is_empty())
    }

    /// Best-effort diagnostic for a semantically empty response
    pub fn rejection_reason(&self) -> String {
        if let Some(reason) = &self.block_reason {
            return format!("prompt blocked: {}", reason);
        }
        if let Some(reason) = self.candidates.iter().find_map(|c| c.finish_reason.as_ref()) {
            return format!("finished without content: {}", reason);
        }
        "no content returned".to_string()
    }
}
