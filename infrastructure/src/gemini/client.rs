//! Gemini HTTP client implementing the [`TextGenerator`] port.
//!
//! One call issues exactly one `generateContent` request with the candidate
//! model substituted into the path. The per-attempt timeout is enforced here
//! via the reqwest client; an expired timeout surfaces as
//! [`GatewayError::Timeout`] and the fallback loop decides what to do next.

use std::time::Duration;

use async_trait::async_trait;
use fortune_application::{GatewayError, TextGenerator};
use fortune_domain::{GenerationRequest, GenerationResponse, Model};
use tracing::debug;

use super::protocol::{self, GenerateContentBody, GenerateContentReply};

/// Default API endpoint
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default per-attempt timeout, matching the original handlers
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection settings for [`GeminiClient`].
///
/// The API key is an explicit value: the adapter never reads process
/// environment or any other ambient state, which keeps tests deterministic
/// with mock credentials.
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    /// Override the API base URL (useful for tests and proxies)
    pub base_url: Option<String>,
    /// Per-attempt timeout
    pub timeout: Duration,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed adapter for the Gemini generateContent API
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            api_key: settings.api_key,
            base_url: settings
                .base_url
                .unwrap_or_else(|| GEMINI_API_URL.to_string()),
        })
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        model: &Model,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GatewayError> {
        let url = self.endpoint(model);
        debug!(model = %model, "calling generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentBody::from_request(request))
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(protocol::status_to_error(status.as_u16(), &body));
        }

        let reply: GenerateContentReply = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedBody(e.to_string()))?;

        Ok(reply.into_domain())
    }
}

fn classify_send_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Connection(error.to_string())
    }
}
