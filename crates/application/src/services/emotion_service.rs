//! Emotion service - Empathetic reflection with a crisis heuristic

use std::{fmt, sync::Arc};

use domain::{DomainError, EmotionResult};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::InferencePort, prompts};

/// Service turning free text into an [`EmotionResult`]
pub struct EmotionService {
    inference: Arc<dyn InferencePort>,
    system_prompt: String,
}

impl fmt::Debug for EmotionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmotionService")
            .field("system_prompt_len", &self.system_prompt.len())
            .finish_non_exhaustive()
    }
}

impl EmotionService {
    /// Create a service using the built-in emotion system prompt
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self::with_system_prompt(inference, prompts::EMOTION_SYSTEM_PROMPT)
    }

    /// Create a service with a custom system prompt
    pub fn with_system_prompt(
        inference: Arc<dyn InferencePort>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            inference,
            system_prompt: prompt.into(),
        }
    }

    /// Reflect on `text` and flag crisis language in the reflection
    ///
    /// Gateway failures are returned as [`ApplicationError::Analysis`].
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn analyze(&self, text: &str) -> Result<EmotionResult, ApplicationError> {
        if text.trim().is_empty() {
            return Err(DomainError::missing_field("text").into());
        }

        let analysis = self
            .inference
            .complete(&self.system_prompt, &prompts::emotion_prompt(text))
            .await
            .map_err(ApplicationError::Analysis)?;

        let result = EmotionResult::from_analysis(analysis);
        debug!(crisis_detected = result.crisis_detected, "Emotion analysis completed");

        Ok(result)
    }

    /// Check if the underlying inference is healthy
    pub async fn is_healthy(&self) -> bool {
        self.inference.is_healthy().await
    }

    /// Get the current model name
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{GatewayError, GatewayErrorKind, MockInferencePort};

    #[tokio::test]
    async fn analyze_returns_reflection() {
        let mut mock = MockInferencePort::new();
        mock.expect_complete()
            .returning(|_, _| Ok("That sounds really hard.".to_string()));

        let service = EmotionService::new(Arc::new(mock));
        let result = service.analyze("I failed my test").await.unwrap();

        assert_eq!(result.analysis, "That sounds really hard.");
        assert!(!result.crisis_detected);
    }

    #[tokio::test]
    async fn analyze_flags_crisis_in_reply() {
        let mut mock = MockInferencePort::new();
        mock.expect_complete().returning(|_, _| {
            Ok("If you are in CRISIS, please call a helpline.".to_string())
        });

        let service = EmotionService::new(Arc::new(mock));
        let result = service.analyze("I can't go on").await.unwrap();

        assert!(result.crisis_detected);
    }

    #[tokio::test]
    async fn analyze_sends_prompt_and_system_prompt() {
        let mut mock = MockInferencePort::new();
        mock.expect_complete()
            .withf(|system: &str, prompt: &str| {
                system == "custom system"
                    && prompt == "Please help me understand and express these feelings: lonely"
            })
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let service = EmotionService::with_system_prompt(Arc::new(mock), "custom system");
        assert!(service.analyze("lonely").await.is_ok());
    }

    #[tokio::test]
    async fn analyze_propagates_gateway_failure() {
        let mut mock = MockInferencePort::new();
        mock.expect_complete()
            .returning(|_, _| Err(GatewayError::unavailable("connection refused")));

        let service = EmotionService::new(Arc::new(mock));
        let err = service.analyze("hello").await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Analysis(ref e) if e.kind == GatewayErrorKind::Unavailable
        ));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn analyze_rejects_blank_text_without_calling_gateway() {
        let mut mock = MockInferencePort::new();
        mock.expect_complete().never();

        let service = EmotionService::new(Arc::new(mock));
        let err = service.analyze("   ").await.unwrap_err();

        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn debug_hides_prompt_text() {
        let service = EmotionService::new(Arc::new(MockInferencePort::new()));
        let debug = format!("{service:?}");
        assert!(debug.contains("EmotionService"));
        assert!(!debug.contains("counselor"));
    }
}
