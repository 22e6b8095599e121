//! AI Core - Language model gateway
//!
//! Owns the HTTP contract with a locally hosted Ollama-compatible inference
//! server: single-shot completions via `/api/generate` and multi-turn chat
//! via `/api/chat`.

pub mod config;
pub mod error;
pub mod ollama;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use ollama::OllamaGateway;
pub use ports::{ChatMessage, LanguageModel};
