//! Application configuration
//!
//! Sources, lowest priority first: built-in defaults, an optional
//! `config.toml` in the working directory, then `HAVEN_*` environment
//! variables with `__` between sections (`HAVEN_INFERENCE__BASE_URL`).

mod server;

use std::path::Path;

pub use ai_core::InferenceConfig;
use application::SystemPrompts;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Configured system prompts
pub type PromptConfig = SystemPrompts;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HAVEN";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference server connection
    #[serde(default)]
    pub inference: InferenceConfig,

    /// System prompts sent with every request
    #[serde(default)]
    pub prompts: PromptConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file, still honoring the environment
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path.as_ref()).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
