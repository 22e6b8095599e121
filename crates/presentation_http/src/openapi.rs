//! OpenAPI documentation module
//!
//! Serves the generated document at `/api-docs/openapi.json` with Swagger UI
//! at `/swagger-ui`.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers, state::AppState};

/// OpenAPI documentation for the Haven API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Haven API",
        version = "0.1.0",
        description = "AI-assisted emotional support: emotion reflection, message drafting, support chat and a wellbeing screening",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Health check and readiness endpoints"),
        (name = "ai", description = "AI support endpoints")
    ),
    paths(
        handlers::health::welcome,
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::emotion::analyze_emotion,
        handlers::drafting::draft_message,
        handlers::drafting::refine_message,
        handlers::chat::chat,
        handlers::assessment::assess,
    ),
    components(
        schemas(
            handlers::health::WelcomeResponse,
            handlers::health::HealthResponse,
            handlers::health::ReadinessResponse,
            handlers::health::ServiceStatus,
            handlers::emotion::AnalyzeEmotionRequest,
            handlers::emotion::EmotionResponse,
            handlers::drafting::DraftMessageRequest,
            handlers::drafting::DraftMessageResponse,
            handlers::drafting::RefineMessageRequest,
            handlers::drafting::RefineMessageResponse,
            handlers::chat::ChatRole,
            handlers::chat::ChatTurnDto,
            handlers::chat::ChatRequest,
            handlers::chat::ChatResponse,
            handlers::chat::SentimentDto,
            handlers::assessment::UserResponseDto,
            handlers::assessment::AssessRequest,
            handlers::assessment::AssessmentDto,
            handlers::assessment::AssessResponse,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// Routes serving the OpenAPI document and Swagger UI
pub fn create_openapi_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/",
            "/health",
            "/ready",
            "/api/ai/analyze-emotion",
            "/api/ai/draft-message",
            "/api/ai/refine-message",
            "/api/ai/chat",
            "/api/ai/assess",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }

    #[test]
    fn document_has_error_schema() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}
