//! Ollama inference adapter - Implements InferencePort using ai_core

use std::{sync::Arc, time::Instant};

use ai_core::{ChatMessage, InferenceConfig, InferenceError, LanguageModel, OllamaGateway};
use application::ports::{GatewayError, InferencePort};
use async_trait::async_trait;
use domain::ChatTurn;
use tracing::{debug, instrument, warn};

/// Adapter exposing a [`LanguageModel`] as the application's inference port
#[derive(Clone)]
pub struct OllamaInferenceAdapter {
    model: Arc<dyn LanguageModel>,
}

impl std::fmt::Debug for OllamaInferenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaInferenceAdapter")
            .field("model", &self.model.model())
            .finish()
    }
}

impl OllamaInferenceAdapter {
    /// Create a new adapter with its own gateway
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        Ok(Self::from_model(Arc::new(OllamaGateway::new(config)?)))
    }

    /// Wrap an existing language model
    pub fn from_model(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    /// Convert a gateway failure into the port's error kinds
    fn map_error(e: InferenceError) -> GatewayError {
        let message = e.to_string();
        match e {
            InferenceError::ConnectionFailed(_) | InferenceError::Timeout(_) => {
                GatewayError::unavailable(message)
            },
            InferenceError::ServerError { .. } | InferenceError::RequestFailed(_) => {
                GatewayError::upstream(message)
            },
            InferenceError::InvalidResponse(_) => GatewayError::malformed(message),
            InferenceError::InvalidRequest(_) => GatewayError::invalid_request(message),
        }
    }
}

#[async_trait]
impl InferencePort for OllamaInferenceAdapter {
    #[instrument(skip(self, system_prompt, prompt), fields(model = %self.model.model(), prompt_len = prompt.len()))]
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, GatewayError> {
        let start = Instant::now();

        let text = self
            .model
            .complete(system_prompt, prompt)
            .await
            .map_err(|e| {
                warn!(error = %e, "Completion failed");
                Self::map_error(e)
            })?;

        debug!(
            latency_ms = start.elapsed().as_millis(),
            response_len = text.len(),
            "Completion finished"
        );
        Ok(text)
    }

    #[instrument(skip(self, turns), fields(model = %self.model.model(), turns = turns.len()))]
    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, GatewayError> {
        let start = Instant::now();
        let messages: Vec<ChatMessage> = turns.iter().map(ChatMessage::from).collect();

        let text = self.model.chat(&messages).await.map_err(|e| {
            warn!(error = %e, "Chat failed");
            Self::map_error(e)
        })?;

        debug!(
            latency_ms = start.elapsed().as_millis(),
            response_len = text.len(),
            "Chat finished"
        );
        Ok(text)
    }

    async fn is_healthy(&self) -> bool {
        match self.model.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                warn!(error = %e, "Inference health check failed");
                false
            },
        }
    }

    fn current_model(&self) -> String {
        self.model.model().to_string()
    }
}
