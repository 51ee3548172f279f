//! TOML configuration file structure

pub mod models;
pub mod output;
pub mod provider;

pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::{FileGeminiConfig, FileGenerationConfig};

use serde::{Deserialize, Serialize};

/// A problem found while validating a loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Which config field the issue is about, e.g. `models.candidates`
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete configuration file structure
///
/// # Example
///
/// ```toml
/// [models]
/// candidates = ["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"]
///
/// [gemini]
/// api_key_env = "GEMINI_API_KEY"
/// timeout_secs = 20
///
/// [generation]
/// temperature = 0.9
/// max_output_tokens = 200
///
/// [output]
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub models: FileModelsConfig,
    pub gemini: FileGeminiConfig,
    pub generation: FileGenerationConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Collect validation issues across all sections
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.parse_candidates().1);
        issues.extend(self.gemini.validate());
        issues.extend(self.generation.validate());
        issues
    }
}
