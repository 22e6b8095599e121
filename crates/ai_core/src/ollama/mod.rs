//! Ollama gateway implementation
//!
//! Works with any server exposing Ollama's `/api/generate` and `/api/chat`.

mod client;

pub use client::OllamaGateway;
