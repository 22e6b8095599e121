//! Wellbeing assessment handler

use axum::{Json, extract::State};
use domain::{AssessmentAnswer, AssessmentResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// One questionnaire entry
///
/// Only `answer` is read and any other keys are ignored. A missing answer
/// counts as empty; a non-string answer rejects the whole request.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserResponseDto {
    #[serde(default)]
    pub answer: String,
}

/// Assessment request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AssessRequest {
    #[serde(default)]
    pub user_responses: Vec<UserResponseDto>,
    /// Accepted for client compatibility and ignored
    #[serde(default)]
    #[allow(dead_code)]
    pub user_id: Option<String>,
}

/// Per-dimension levels
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssessmentDto {
    /// low | moderate | high
    pub stress_level: String,
    /// low | moderate | high
    pub anxiety_level: String,
    /// low | moderate | high
    pub depression_risk: String,
    /// poor | fair | good | excellent
    pub overall_wellbeing: String,
}

/// Assessment response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AssessResponse {
    pub assessment: AssessmentDto,
    /// At most five, most urgent first
    pub recommendations: Vec<String>,
}

impl From<AssessmentResult> for AssessResponse {
    fn from(result: AssessmentResult) -> Self {
        Self {
            assessment: AssessmentDto {
                stress_level: result.stress_level.to_string(),
                anxiety_level: result.anxiety_level.to_string(),
                depression_risk: result.depression_risk.to_string(),
                overall_wellbeing: result.overall_wellbeing.to_string(),
            },
            recommendations: result.recommendations,
        }
    }
}

/// Screen questionnaire answers for stress, anxiety and low mood
#[utoipa::path(
    post,
    path = "/api/ai/assess",
    tag = "ai",
    request_body = AssessRequest,
    responses(
        (status = 200, description = "Assessment", body = AssessResponse),
        (status = 400, description = "Malformed answers", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(answers = request.user_responses.len()))]
pub async fn assess(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AssessRequest>,
) -> Result<Json<AssessResponse>, ApiError> {
    let answers: Vec<AssessmentAnswer> = request
        .user_responses
        .into_iter()
        .map(|entry| AssessmentAnswer::new(entry.answer))
        .collect();

    Ok(Json(state.assessment_service.assess(&answers).into()))
}
