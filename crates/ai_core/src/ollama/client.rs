//! Ollama HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{ChatMessage, LanguageModel};

/// Gateway to an Ollama-compatible inference server
///
/// Owns a single connection pool shared by all concurrent calls. Construct
/// once at startup and share behind an `Arc`; the pool is released when the
/// last handle is dropped.
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    client: Client,
    config: InferenceConfig,
}

impl OllamaGateway {
    /// Create a gateway with its own HTTP client
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a gateway around an existing HTTP client
    pub fn with_client(client: Client, config: InferenceConfig) -> Self {
        info!(
            base_url = %config.base_url,
            model = %config.model,
            timeout_ms = config.timeout_ms,
            "Initialized Ollama gateway"
        );

        Self { client, config }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Result<Self, InferenceError> {
        Self::new(InferenceConfig::default())
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/api/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// POST `body` and decode a success payload
    async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, InferenceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let timeout_ms = self.config.timeout_ms;

        let response = self
            .client
            .post(self.api_url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| InferenceError::from_transport(&e, timeout_ms))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, endpoint, "Inference request failed");
            return Err(InferenceError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| InferenceError::from_transport(&e, timeout_ms))?;

        serde_json::from_slice(&bytes).map_err(|e| InferenceError::InvalidResponse(e.to_string()))
    }
}

/// Body for `/api/generate`
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// Body for `/api/chat`
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Reject absent or blank text in an otherwise well-formed response
fn require_text(text: Option<String>, field: &str) -> Result<String, InferenceError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(InferenceError::InvalidResponse(format!(
            "empty `{field}` field"
        ))),
        None => Err(InferenceError::InvalidResponse(format!(
            "missing `{field}` field"
        ))),
    }
}

#[async_trait]
impl LanguageModel for OllamaGateway {
    #[instrument(skip(self, system_prompt, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, InferenceError> {
        if system_prompt.trim().is_empty() || prompt.trim().is_empty() {
            return Err(InferenceError::InvalidRequest(
                "system prompt and prompt must not be empty".to_string(),
            ));
        }

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            system: system_prompt,
            stream: false,
            temperature: self.config.temperature,
        };

        debug!("Sending completion request");
        let response: GenerateResponse = self.post_json("generate", &request).await?;
        let text = require_text(response.response, "response")?;
        debug!(response_len = text.len(), "Completion finished");

        Ok(text)
    }

    #[instrument(skip(self, messages), fields(model = %self.config.model, turns = messages.len()))]
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError> {
        if messages.is_empty() {
            return Err(InferenceError::InvalidRequest(
                "chat requires at least one message".to_string(),
            ));
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages,
            stream: false,
        };

        debug!("Sending chat request");
        let response: ChatResponse = self.post_json("chat", &request).await?;
        let text = require_text(
            response.message.and_then(|m| m.content),
            "message.content",
        )?;
        debug!(response_len = text.len(), "Chat finished");

        Ok(text)
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.to_string())),
        }
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
