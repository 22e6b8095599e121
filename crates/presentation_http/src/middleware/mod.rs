//! HTTP middleware components

pub mod cors;
pub mod request_id;
pub mod validation;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, RequestId, propagate_request_id};
pub use validation::{ValidatedJson, ValidationError};
