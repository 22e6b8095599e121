//! Drafting service - Co-writing a message to a support contact

use std::{fmt, sync::Arc};

use domain::{DomainError, DraftResult, MessageContext};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::InferencePort, prompts};

/// Service for drafting and refining messages
pub struct DraftingService {
    inference: Arc<dyn InferencePort>,
    system_prompt: String,
}

impl fmt::Debug for DraftingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DraftingService")
            .field("system_prompt_len", &self.system_prompt.len())
            .finish_non_exhaustive()
    }
}

impl DraftingService {
    /// Create a service using the built-in messaging system prompt
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self::with_system_prompt(inference, prompts::MESSAGE_SYSTEM_PROMPT)
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

    /// Draft a message from the given context
    #[instrument(skip(self, context), fields(recipient = %context.recipient_type))]
    pub async fn draft(&self, context: &MessageContext) -> Result<DraftResult, ApplicationError> {
        context.validate()?;

        let draft = self
            .inference
            .complete(&self.system_prompt, &prompts::draft_prompt(context))
            .await
            .map_err(ApplicationError::Draft)?;

        debug!(draft_len = draft.len(), "Message drafted");
        Ok(DraftResult::new(draft))
    }

    /// Revise a draft according to `feedback`
    ///
    /// Returns the model's text verbatim.
    #[instrument(skip(self, original_draft, feedback), fields(draft_len = original_draft.len(), has_feedback = feedback.is_some()))]
    pub async fn refine(
        &self,
        original_draft: &str,
        feedback: Option<&str>,
    ) -> Result<String, ApplicationError> {
        if original_draft.trim().is_empty() {
            return Err(DomainError::missing_field("draft").into());
        }

        let refined = self
            .inference
            .complete(
                &self.system_prompt,
                &prompts::refine_prompt(original_draft, feedback),
            )
            .await
            .map_err(ApplicationError::Draft)?;

        debug!(refined_len = refined.len(), "Message refined");
        Ok(refined)
    }
}
