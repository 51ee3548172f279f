//! Text generation port
//!
//! Defines the interface for communicating with the remote
//! text-generation service.

use async_trait::async_trait;
use fortune_domain::{GenerationRequest, GenerationResponse, Model};
use thiserror::Error;

/// Transport-level failures from the generation service.
///
/// All of these are recoverable at the fallback level: the loop advances to
/// the next candidate regardless of which variant occurred.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// Gateway to the remote text-generation service.
///
/// One call issues exactly one request against the named model. Retry and
/// fallback policy live entirely in the caller; the credential lives in the
/// adapter, passed in at construction time.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issue one generation request against `model`.
    ///
    /// `Ok` means transport success only; the response may still be
    /// semantically empty (no usable content).
    async fn generate(
        &self,
        model: &Model,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, GatewayError>;
}
