//! Gemini generateContent adapter

pub mod client;
mod protocol;

pub use client::{GeminiClient, GeminiSettings};
