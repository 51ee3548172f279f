//! Candidate model configuration from TOML (`[models]` section)

use fortune_domain::Model;
use serde::{Deserialize, Serialize};

use super::ConfigIssue;

/// Candidate model list from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// candidates = ["gemini-2.5-flash", "gemini-2.0-flash", "gemini-1.5-flash"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Fallback chain, highest priority first. `None` means use the
    /// built-in default chain.
    pub candidates: Option<Vec<String>>,
}

impl FileModelsConfig {
    /// Parse the candidate strings, collecting issues for blank names.
    ///
    /// Blank entries are dropped from the parsed list so one typo does not
    /// take the whole chain down; they are still reported as issues.
    pub fn parse_candidates(&self) -> (Option<Vec<Model>>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let Some(strings) = &self.candidates else {
            return (None, issues);
        };

        let mut candidates = Vec::new();
        for s in strings {
            if s.trim().is_empty() {
                issues.push(ConfigIssue {
                    field: "models.candidates".to_string(),
                    message: "model name cannot be empty".to_string(),
                });
            } else {
                // Model::from_str is infallible; unknown names become Custom(...)
                let model: Model = s.parse().unwrap();
                candidates.push(model);
            }
        }
        (Some(candidates), issues)
    }
}
