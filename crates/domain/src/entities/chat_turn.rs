//! Chat turn entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::Sentiment};

/// Role of the message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user
    User,
    /// Message from the assistant
    Assistant,
    /// System prompt or instruction
    System,
}

impl MessageRole {
    /// Wire name used by the inference service
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// A single turn in a chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Role of the sender
    pub role: MessageRole,
    /// Turn content
    pub content: String,
    /// When the turn was written, if the client reported it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatTurn {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    /// Create a system turn
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Attach a timestamp
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Check that a chat request is non-empty and ends with a user turn
///
/// Returns the final user turn on success.
pub fn ensure_user_turn_last(turns: &[ChatTurn]) -> Result<&ChatTurn, DomainError> {
    let last = turns
        .last()
        .ok_or_else(|| DomainError::ValidationError("chat requires at least one turn".into()))?;

    if last.role != MessageRole::User {
        return Err(DomainError::ValidationError(format!(
            "last turn must be from the user, got {}",
            last.role.as_str()
        )));
    }

    Ok(last)
}

/// Assistant reply for a chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Assistant reply text
    pub response: String,
    /// Present iff the emotion analysis of the last user turn succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_roles() {
        assert_eq!(ChatTurn::user("hi").role, MessageRole::User);
        assert_eq!(ChatTurn::assistant("hello").role, MessageRole::Assistant);
        assert_eq!(ChatTurn::system("be kind").role, MessageRole::System);
    }

    #[test]
    fn empty_turns_are_rejected() {
        let err = ensure_user_turn_last(&[]).unwrap_err();
        assert!(err.to_string().contains("at least one turn"));
    }

    #[test]
    fn assistant_last_is_rejected() {
        let turns = vec![ChatTurn::user("hi"), ChatTurn::assistant("hello")];
        let err = ensure_user_turn_last(&turns).unwrap_err();
        assert!(err.to_string().contains("assistant"));
    }

    #[test]
    fn returns_last_user_turn() {
        let turns = vec![
            ChatTurn::user("first"),
            ChatTurn::assistant("reply"),
            ChatTurn::user("second"),
        ];
        let last = ensure_user_turn_last(&turns).unwrap();
        assert_eq!(last.content, "second");
    }

    #[test]
    fn deserializes_without_timestamp() {
        let json = r#"{"role":"user","content":"hello"}"#;
        let turn: ChatTurn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.role, MessageRole::User);
        assert!(turn.timestamp.is_none());
    }

    #[test]
    fn deserializes_with_timestamp() {
        let json = r#"{"role":"assistant","content":"hi","timestamp":"2024-05-01T10:00:00Z"}"#;
        let turn: ChatTurn = serde_json::from_str(json).unwrap();
        assert!(turn.timestamp.is_some());
    }

    #[test]
    fn chat_result_omits_missing_sentiment() {
        let result = ChatResult {
            response: "ok".to_string(),
            sentiment: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("sentiment"));
    }
}
