//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-wide
//! setup: configuration loading and the tracing subscriber.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, InferenceConfig, PromptConfig, ServerConfig};
pub use telemetry::{LogFormat, TelemetryError, init_tracing};
