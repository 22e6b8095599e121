//! Inference port - Interface to the language model gateway

use std::fmt;

use async_trait::async_trait;
use domain::ChatTurn;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Broad cause of a gateway failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The request was rejected before it was sent
    InvalidRequest,
    /// The inference server could not be reached or timed out
    Unavailable,
    /// The inference server answered with a failure status
    Upstream,
    /// The inference server answered with an unusable payload
    MalformedResponse,
}

impl fmt::Display for GatewayErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::Upstream => write!(f, "upstream"),
            Self::MalformedResponse => write!(f, "malformed_response"),
        }
    }
}

/// Failure of a single gateway call, with the cause description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub kind: GatewayErrorKind,
    pub message: String,
}

impl GatewayError {
    pub fn new(kind: GatewayErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::InvalidRequest, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Unavailable, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::Upstream, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorKind::MalformedResponse, message)
    }
}

/// Port for language model calls
///
/// One outbound request per call. Implementations never retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait InferencePort: Send + Sync {
    /// Single-shot completion of `prompt` under `system_prompt`
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, GatewayError>;

    /// Assistant reply for an ordered turn sequence
    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, GatewayError>;

    /// Check if the inference backend is healthy
    async fn is_healthy(&self) -> bool;

    /// Get the name of the current model
    fn current_model(&self) -> String;
}
