//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a daily fortune
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Formatted console card (default)
    Text,
    /// JSON matching the original endpoint's response shape
    Json,
    /// Plain share card for pasting into chats
    Share,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Share).unwrap();
        assert_eq!(json, "\"share\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
