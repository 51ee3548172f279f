//! Output configuration from TOML (`[output]` section)

use fortune_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output preferences from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default output format; the CLI flag overrides it
    pub format: OutputFormat,
}
