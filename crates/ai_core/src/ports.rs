//! Port definitions for the language model gateway
//!
//! Defines the trait that gateway adapters must implement.

use async_trait::async_trait;
use domain::ChatTurn;
use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// A message in a chat request (Ollama wire format)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

impl From<&ChatTurn> for ChatMessage {
    fn from(turn: &ChatTurn) -> Self {
        Self::new(turn.role.as_str(), turn.content.clone())
    }
}

/// Port for language model implementations
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Single-shot completion with a system prompt
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, InferenceError>;

    /// Assistant reply for an ordered message list
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError>;

    /// Check if the inference server is reachable
    async fn health_check(&self) -> Result<bool, InferenceError>;

    /// Model used for every request
    fn model(&self) -> &str;
}
