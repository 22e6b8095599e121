//! Configuration for the language model gateway

use serde::{Deserialize, Serialize};

/// Configuration for the inference server connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the Ollama-compatible server
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use for every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Advisory generation cap. Not sent with current request shapes.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature for sampling (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2:latest".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_tokens() -> u32 {
    2000
}

const fn default_temperature() -> f32 {
    0.7
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_ms: default_timeout_ms(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

impl InferenceConfig {
    /// Config pointing at a specific server, defaults elsewhere
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = InferenceConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "llama3.2:latest");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_tokens, 2000);
        assert!((config.temperature - 0.7).abs() < 0.01);
    }

    #[test]
    fn with_base_url_keeps_other_defaults() {
        let config = InferenceConfig::with_base_url("http://gpu-box:11434");
        assert_eq!(config.base_url, "http://gpu-box:11434");
        assert_eq!(config.timeout_ms, 30000);
    }

    #[test]
    fn config_deserialization() {
        let json = r#"{"base_url":"http://custom:8080","model":"mistral"}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://custom:8080");
        assert_eq!(config.model, "mistral");
    }

    #[test]
    fn config_deserialization_with_defaults() {
        let json = r#"{}"#;
        let config: InferenceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.timeout_ms, 30000);
    }
}
