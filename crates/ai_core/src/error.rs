//! Gateway errors

use thiserror::Error;

/// Errors that can occur while talking to the inference server
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to inference server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to inference server failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request was rejected before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Response parsing failed or a required field was missing
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timeout after {0}ms")]
    Timeout(u64),

    /// Server answered with a non-success status
    #[error("Server error: status {status}: {body}")]
    ServerError { status: u16, body: String },
}

impl InferenceError {
    /// Classify a transport error, reporting `timeout_ms` for timeouts
    pub fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    /// Whether the inference server could not be reached at all
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_includes_duration() {
        let err = InferenceError::Timeout(30000);
        assert_eq!(err.to_string(), "Inference timeout after 30000ms");
    }

    #[test]
    fn server_error_message_includes_status() {
        let err = InferenceError::ServerError {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: status 502: bad gateway");
    }

    #[test]
    fn unavailable_classification() {
        assert!(InferenceError::Timeout(1).is_unavailable());
        assert!(InferenceError::ConnectionFailed("refused".into()).is_unavailable());
        assert!(!InferenceError::InvalidResponse("nope".into()).is_unavailable());
    }
}
