//! Presentation layer for mahjong-fortune
//!
//! This crate contains CLI definitions, output formatters,
//! and the attempt progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::AttemptReporter;
