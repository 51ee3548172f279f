//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileGeminiConfig, FileGenerationConfig, FileModelsConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
