//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers. The core
//! treats the gateway as an opaque, possibly slow, possibly failing network
//! call; adapters live in the infrastructure layer.

use async_trait::async_trait;
use smartgpt_domain::{Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// The core never retries these; retry policy is an explicit wrapper the
/// caller may add around the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("rate limited")]
    RateLimited,

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("request timed out")]
    Timeout,

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// One call sends a full transcript as context and yields the assistant's
/// reply. The model identifier is passed through unchanged.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a transcript to a model and get the assistant reply
    async fn send(
        &self,
        model: &Model,
        transcript: &[Message],
        temperature: f32,
    ) -> Result<Message, GatewayError>;
}
