//! API error handling
//!
//! Every failure reaches the client as `{error, code, details?}` JSON.
//! Gateway failures keep their cause text so the caller sees why the
//! inference service could not answer.

use application::{ApplicationError, GatewayErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(msg, "bad_request"),
            ),
            Self::ServiceUnavailable(msg) => {
                warn!(error = %msg, "Inference-backed request failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorResponse::new(msg, "service_unavailable"),
                )
            },
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        details: Some(msg),
                        ..ErrorResponse::new("An internal error occurred", "internal_error")
                    },
                )
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match &err {
            ApplicationError::Domain(_) => Self::BadRequest(err.to_string()),
            ApplicationError::Analysis(cause)
            | ApplicationError::Draft(cause)
            | ApplicationError::Chat(cause) => {
                if cause.kind == GatewayErrorKind::InvalidRequest {
                    Self::BadRequest(err.to_string())
                } else {
                    Self::ServiceUnavailable(err.to_string())
                }
            },
            ApplicationError::Configuration(_) => Self::Internal(err.to_string()),
        }
    }
}
