//! Emotion analysis handler

use axum::{Json, extract::State};
use domain::EmotionResult;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Emotion analysis request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnalyzeEmotionRequest {
    /// What the user is feeling, in their own words
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

/// Emotion analysis response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmotionResponse {
    /// Empathetic reflection from the model
    pub analysis: String,
    /// Whether the reflection mentions a crisis
    pub crisis_detected: bool,
}

impl From<EmotionResult> for EmotionResponse {
    fn from(result: EmotionResult) -> Self {
        Self {
            analysis: result.analysis,
            crisis_detected: result.crisis_detected,
        }
    }
}

/// Reflect on a user's feelings
#[utoipa::path(
    post,
    path = "/api/ai/analyze-emotion",
    tag = "ai",
    request_body = AnalyzeEmotionRequest,
    responses(
        (status = 200, description = "Emotion reflection", body = EmotionResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 503, description = "Inference service failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn analyze_emotion(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalyzeEmotionRequest>,
) -> Result<Json<EmotionResponse>, ApiError> {
    let result = state.emotion_service.analyze(&request.text).await?;
    Ok(Json(result.into()))
}
