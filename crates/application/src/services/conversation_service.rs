//! Conversation service - Support chat with a sentiment signal
//!
//! The assistant reply and the emotion analysis of the last user turn run
//! concurrently. Only the reply is required: if the analysis fails the
//! result simply carries no sentiment.

use std::{fmt, sync::Arc};

use domain::{ChatResult, ChatTurn, Sentiment, ensure_user_turn_last};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::InferencePort,
    prompts::SystemPrompts,
    services::EmotionService,
};

/// Service orchestrating a chat turn
pub struct ConversationService {
    inference: Arc<dyn InferencePort>,
    emotion: EmotionService,
    system_prompt: String,
}

impl fmt::Debug for ConversationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationService")
            .field("emotion", &self.emotion)
            .field("system_prompt_len", &self.system_prompt.len())
            .finish_non_exhaustive()
    }
}

impl ConversationService {
    /// Create a service using the built-in emotion-support prompt
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self::with_prompts(inference, &SystemPrompts::default())
    }

    /// Create a service with configured prompts
    ///
    /// The chat and the analyzer both use the emotion-support prompt.
    pub fn with_prompts(inference: Arc<dyn InferencePort>, prompts: &SystemPrompts) -> Self {
        Self {
            emotion: EmotionService::with_system_prompt(
                Arc::clone(&inference),
                prompts.emotion_prompt.clone(),
            ),
            inference,
            system_prompt: prompts.emotion_prompt.clone(),
        }
    }

    /// Produce the assistant reply to `turns`
    ///
    /// `turns` must be non-empty and end with a user turn. A system turn
    /// is prepended before the sequence reaches the model.
    ///
    /// A blank last user turn still gets a reply. The analyzer rejects the
    /// blank text without calling the model, which counts as a failed
    /// analysis, so the sentiment is omitted.
    #[instrument(skip(self, turns), fields(turns = turns.len()))]
    pub async fn chat(&self, turns: &[ChatTurn]) -> Result<ChatResult, ApplicationError> {
        let last = ensure_user_turn_last(turns)?;

        let mut full = Vec::with_capacity(turns.len() + 1);
        full.push(ChatTurn::system(self.system_prompt.clone()));
        full.extend_from_slice(turns);

        let (reply, analysis) = tokio::join!(
            self.inference.chat(&full),
            self.emotion.analyze(&last.content)
        );

        let response = reply.map_err(ApplicationError::Chat)?;

        let sentiment = match analysis {
            Ok(result) => Some(Sentiment::from_crisis_flag(result.crisis_detected)),
            Err(e) => {
                warn!(error = %e, "Sentiment analysis failed, replying without it");
                None
            },
        };

        debug!(
            response_len = response.len(),
            has_sentiment = sentiment.is_some(),
            "Chat reply ready"
        );

        Ok(ChatResult {
            response,
            sentiment,
        })
    }

    /// The prompt prepended to every chat
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}
