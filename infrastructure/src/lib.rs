//! Infrastructure layer for mahjong-fortune
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGeminiConfig, FileGenerationConfig,
    FileModelsConfig, FileOutputConfig,
};
pub use gemini::{GeminiClient, GeminiSettings};
