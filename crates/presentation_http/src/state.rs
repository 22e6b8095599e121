//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ApplicationError, AssessmentService, ConversationService, DraftingService, EmotionService,
    InferencePort,
};
use infrastructure::{AppConfig, OllamaInferenceAdapter};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Emotion reflection
    pub emotion_service: Arc<EmotionService>,
    /// Message drafting and refinement
    pub drafting_service: Arc<DraftingService>,
    /// Support chat
    pub conversation_service: Arc<ConversationService>,
    /// Keyword wellbeing screening
    pub assessment_service: AssessmentService,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire every service to one inference port
    pub fn new(inference: Arc<dyn InferencePort>, config: AppConfig) -> Self {
        let prompts = &config.prompts;
        Self {
            emotion_service: Arc::new(EmotionService::with_system_prompt(
                Arc::clone(&inference),
                prompts.emotion_prompt.clone(),
            )),
            drafting_service: Arc::new(DraftingService::with_system_prompt(
                Arc::clone(&inference),
                prompts.message_prompt.clone(),
            )),
            conversation_service: Arc::new(ConversationService::with_prompts(inference, prompts)),
            assessment_service: AssessmentService::new(),
            config: Arc::new(config),
        }
    }

    /// Build the Ollama adapter from `config.inference` and wire it up
    ///
    /// The adapter owns the one HTTP connection pool of the process.
    pub fn from_config(config: AppConfig) -> Result<Self, ApplicationError> {
        let adapter = OllamaInferenceAdapter::new(config.inference.clone()).map_err(|e| {
            ApplicationError::Configuration(format!("failed to initialize inference: {e}"))
        })?;
        Ok(Self::new(Arc::new(adapter), config))
    }
}
