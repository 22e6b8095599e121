//! Application layer - Use cases and orchestration
//!
//! Builds prompts, calls the inference port and turns model output into
//! structured results. Adapters in the infrastructure layer implement the
//! ports defined here.

pub mod error;
pub mod ports;
pub mod prompts;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use prompts::SystemPrompts;
pub use services::*;
