//! Domain layer for mahjong-fortune
//!
//! This crate contains the core types and fortune logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Daily seed
//!
//! The fortune for a given day is deterministic: the date (and optionally a
//! user identity) is hashed into a seed, and the seed indexes the fixed
//! lucky-tile and lucky-yaku tables. Same day, same picks.
//!
//! ## Generation
//!
//! The flavor text (fortune line + play tip) comes from a remote
//! text-generation model. The domain models the request and response shapes
//! and the post-processing of model replies, but performs no I/O.

pub mod config;
pub mod core;
pub mod fortune;
pub mod generation;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{model::Model, seed::DateSeed};
pub use fortune::{
    entities::{Fortune, FortuneText},
    parsing::{ParseError, parse_fortune_reply},
    tables::LuckyPick,
};
pub use generation::{
    GeneratedCandidate, GenerationParams, GenerationRequest, GenerationResponse,
};
pub use prompt::PromptTemplate;
