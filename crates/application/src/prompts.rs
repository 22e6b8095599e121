//! Prompt templates
//!
//! The system prompts are configurable; the user-prompt templates are fixed.

use domain::MessageContext;
use serde::{Deserialize, Serialize};

/// System prompt for emotion reflection and the support chat
pub const EMOTION_SYSTEM_PROMPT: &str = "You are an empathetic AI counselor helping a young person \
express their emotions. Focus on understanding and validating their feelings while helping them \
articulate their thoughts clearly. Always maintain a supportive and non-judgmental tone. If you \
detect any crisis situations, recommend professional help and emergency resources.";

/// System prompt for drafting messages to a support contact
pub const MESSAGE_SYSTEM_PROMPT: &str = "You are an AI communication assistant helping a young \
person craft a message to their support network. Help them express their needs and feelings \
clearly while maintaining appropriate boundaries. Focus on constructive and honest communication. \
If the situation seems urgent, suggest immediate contact with emergency services or crisis support.";

/// Feedback used when a refine request carries none
pub const DEFAULT_REFINE_FEEDBACK: &str = "Make it more concise and clear";

/// The two system prompts, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPrompts {
    #[serde(default = "default_emotion_prompt")]
    pub emotion_prompt: String,
    #[serde(default = "default_message_prompt")]
    pub message_prompt: String,
}

fn default_emotion_prompt() -> String {
    EMOTION_SYSTEM_PROMPT.to_string()
}

fn default_message_prompt() -> String {
    MESSAGE_SYSTEM_PROMPT.to_string()
}

impl Default for SystemPrompts {
    fn default() -> Self {
        Self {
            emotion_prompt: default_emotion_prompt(),
            message_prompt: default_message_prompt(),
        }
    }
}

/// Prompt asking the model to reflect on the user's feelings
pub fn emotion_prompt(text: &str) -> String {
    format!("Please help me understand and express these feelings: {text}")
}

/// Prompt asking the model to draft a message
pub fn draft_prompt(context: &MessageContext) -> String {
    format!(
        "Please help me write a message to my {}. I'm feeling {} and want to express that I {}. \
         Situation context: {}",
        context.recipient_type,
        context.emotion,
        context.need,
        context.situation_or_empty()
    )
}

/// Prompt asking the model to revise a draft
///
/// Missing or blank feedback falls back to [`DEFAULT_REFINE_FEEDBACK`].
pub fn refine_prompt(original_draft: &str, feedback: Option<&str>) -> String {
    let feedback = feedback
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_REFINE_FEEDBACK);
    format!("Please help me improve this message: {original_draft}\nFeedback: {feedback}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_prompt_embeds_text() {
        assert_eq!(
            emotion_prompt("I can't sleep"),
            "Please help me understand and express these feelings: I can't sleep"
        );
    }

    #[test]
    fn draft_prompt_interpolates_context() {
        let ctx = MessageContext::new(
            "teacher",
            "overwhelmed",
            "need more time for my essay",
            Some("three exams this week".into()),
        )
        .unwrap();
        assert_eq!(
            draft_prompt(&ctx),
            "Please help me write a message to my teacher. I'm feeling overwhelmed and want to \
             express that I need more time for my essay. Situation context: three exams this week"
        );
    }

    #[test]
    fn draft_prompt_uses_empty_situation_when_absent() {
        let ctx = MessageContext::new("parent", "sad", "want to talk", None).unwrap();
        assert!(draft_prompt(&ctx).ends_with("Situation context: "));
    }

    #[test]
    fn refine_prompt_without_feedback_matches_default() {
        assert_eq!(
            refine_prompt("Hi coach", None),
            refine_prompt("Hi coach", Some(DEFAULT_REFINE_FEEDBACK))
        );
    }

    #[test]
    fn refine_prompt_blank_feedback_uses_default() {
        assert_eq!(
            refine_prompt("Hi coach", Some("  ")),
            refine_prompt("Hi coach", None)
        );
    }

    #[test]
    fn refine_prompt_embeds_draft_and_feedback() {
        assert_eq!(
            refine_prompt("Hi coach", Some("warmer")),
            "Please help me improve this message: Hi coach\nFeedback: warmer"
        );
    }

    #[test]
    fn default_system_prompts_mention_emergency_help() {
        let prompts = SystemPrompts::default();
        assert!(prompts.emotion_prompt.contains("emergency resources"));
        assert!(prompts.message_prompt.contains("crisis support"));
    }

    #[test]
    fn system_prompts_deserialize_with_defaults() {
        let prompts: SystemPrompts =
            serde_json::from_str(r#"{"emotion_prompt":"custom"}"#).unwrap();
        assert_eq!(prompts.emotion_prompt, "custom");
        assert_eq!(prompts.message_prompt, MESSAGE_SYSTEM_PROMPT);
    }
}
