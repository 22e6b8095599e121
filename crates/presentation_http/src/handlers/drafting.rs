//! Message drafting handlers

use axum::{Json, extract::State};
use domain::{DraftResult, MessageContext};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Draft request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DraftMessageRequest {
    /// Who the message is for, e.g. "teacher"
    #[validate(length(min = 1, message = "recipient_type must not be empty"))]
    pub recipient_type: String,
    /// How the user feels
    #[validate(length(min = 1, message = "emotion must not be empty"))]
    pub emotion: String,
    /// What the user needs from the recipient
    #[validate(length(min = 1, message = "need must not be empty"))]
    pub need: String,
    /// Optional background
    #[serde(default)]
    pub situation: Option<String>,
}

impl From<DraftMessageRequest> for MessageContext {
    fn from(request: DraftMessageRequest) -> Self {
        Self {
            recipient_type: request.recipient_type,
            emotion: request.emotion,
            need: request.need,
            situation: request.situation,
        }
    }
}

/// Draft response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftMessageResponse {
    pub draft: String,
    /// Three fixed writing tips
    pub suggestions: Vec<String>,
}

impl From<DraftResult> for DraftMessageResponse {
    fn from(result: DraftResult) -> Self {
        Self {
            draft: result.draft,
            suggestions: result.suggestions,
        }
    }
}

/// Draft a message to a support contact
#[utoipa::path(
    post,
    path = "/api/ai/draft-message",
    tag = "ai",
    request_body = DraftMessageRequest,
    responses(
        (status = 200, description = "Drafted message", body = DraftMessageResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 503, description = "Inference service failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(recipient = %request.recipient_type))]
pub async fn draft_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DraftMessageRequest>,
) -> Result<Json<DraftMessageResponse>, ApiError> {
    let context = MessageContext::from(request);
    let result = state.drafting_service.draft(&context).await?;
    Ok(Json(result.into()))
}

/// Refine request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefineMessageRequest {
    /// Draft to improve
    #[validate(length(min = 1, message = "draft must not be empty"))]
    pub draft: String,
    /// What to change; a blank value uses the default feedback
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Refine response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RefineMessageResponse {
    pub refined_draft: String,
}

/// Revise a draft according to feedback
#[utoipa::path(
    post,
    path = "/api/ai/refine-message",
    tag = "ai",
    request_body = RefineMessageRequest,
    responses(
        (status = 200, description = "Refined message", body = RefineMessageResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 503, description = "Inference service failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(draft_len = request.draft.len()))]
pub async fn refine_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefineMessageRequest>,
) -> Result<Json<RefineMessageResponse>, ApiError> {
    let refined_draft = state
        .drafting_service
        .refine(&request.draft, request.feedback.as_deref())
        .await?;
    Ok(Json(RefineMessageResponse { refined_draft }))
}
