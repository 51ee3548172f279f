//! Application layer for mahjong-fortune
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{AttemptObserver, NoProgress},
    text_generator::{GatewayError, TextGenerator},
};
pub use use_cases::fallback::{AttemptFailure, FallbackInvoker, Generated, InvokeError};
pub use use_cases::generate_fortune::{
    GenerateFortuneError, GenerateFortuneInput, GenerateFortuneUseCase,
};
