//! Model value object representing a candidate generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Candidate Gemini models for fortune generation (Value Object)
///
/// The fallback chain tries these in list order, so the order of
/// [`Model::default_candidates`] is the default priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Flash,
    Gemini25FlashLite,
    Gemini20Flash,
    Gemini15Flash,
    Gemini15Pro,
    GeminiPro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::GeminiPro => "gemini-pro",
            Model::Custom(s) => s,
        }
    }

    /// Default fallback chain, highest priority first
    pub fn default_candidates() -> Vec<Model> {
        vec![
            Model::Gemini25Flash,
            Model::Gemini20Flash,
            Model::Gemini15Flash,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (gemini-2.5-flash)
    fn default() -> Self {
        Model::Gemini25Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-pro" => Model::GeminiPro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
