//! Provider and generation configuration from TOML
//! (`[gemini]` and `[generation]` sections)

use fortune_domain::GenerationParams;
use serde::{Deserialize, Serialize};

use super::ConfigIssue;

/// Gemini API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL override for the Gemini API.
    pub base_url: Option<String>,
    /// Per-attempt timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: 20,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key: an inline value wins, otherwise the configured
    /// environment variable is consulted.
    ///
    /// This is the only place ambient process state is read, and it runs at
    /// the composition root; the adapter itself receives the resolved value.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key
            && !key.trim().is_empty()
        {
            return Some(key.clone());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "gemini.api_key_env".to_string(),
                message: "environment variable name cannot be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue {
                field: "gemini.timeout_secs".to_string(),
                message: "per-attempt timeout must be at least one second".to_string(),
            });
        }
        issues
    }
}

/// Sampling parameters from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            temperature: params.temperature,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

impl FileGenerationConfig {
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue {
                field: "generation.temperature".to_string(),
                message: "temperature must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.max_output_tokens == 0 {
            issues.push(ConfigIssue {
                field: "generation.max_output_tokens".to_string(),
                message: "max_output_tokens must be positive".to_string(),
            });
        }
        issues
    }
}
