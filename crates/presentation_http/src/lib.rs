//! Haven HTTP presentation layer
//!
//! Axum routes, request/response DTOs and middleware for the support API.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, ValidationError};
pub use routes::{create_app, create_router};
pub use state::AppState;
