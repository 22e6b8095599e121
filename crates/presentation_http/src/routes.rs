//! Route definitions

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers,
    middleware::{cors_layer, propagate_request_id},
    openapi::create_openapi_routes,
    state::AppState,
};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::welcome))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // AI support API
        .route(
            "/api/ai/analyze-emotion",
            post(handlers::emotion::analyze_emotion),
        )
        .route("/api/ai/draft-message", post(handlers::drafting::draft_message))
        .route(
            "/api/ai/refine-message",
            post(handlers::drafting::refine_message),
        )
        .route("/api/ai/chat", post(handlers::chat::chat))
        .route("/api/ai/assess", post(handlers::assessment::assess))
        // API documentation
        .merge(create_openapi_routes())
        .with_state(state)
}

/// Router with the cross-cutting layers applied
///
/// Order matters: the request-id layer is outermost so the trace span
/// and every handler log carry the id.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(propagate_request_id))
}
