//! Application-level errors

use domain::DomainError;
use thiserror::Error;

use crate::ports::{GatewayError, GatewayErrorKind};

/// Errors that can occur in the application layer
///
/// Gateway failures are wrapped per operation so callers can tell which
/// step failed while still reaching the original cause.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level (validation) error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Emotion analysis failed
    #[error("Emotion analysis failed: {0}")]
    Analysis(#[source] GatewayError),

    /// Drafting or refining a message failed
    #[error("Message drafting failed: {0}")]
    Draft(#[source] GatewayError),

    /// Chat completion failed
    #[error("Chat failed: {0}")]
    Chat(#[source] GatewayError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// The underlying gateway failure, if any
    pub fn gateway_cause(&self) -> Option<&GatewayError> {
        match self {
            Self::Analysis(e) | Self::Draft(e) | Self::Chat(e) => Some(e),
            Self::Domain(_) | Self::Configuration(_) => None,
        }
    }

    /// Check if this error is retryable
    ///
    /// Nothing in the core retries; this only informs callers.
    pub fn is_retryable(&self) -> bool {
        self.gateway_cause()
            .is_some_and(|e| e.kind == GatewayErrorKind::Unavailable)
    }
}
