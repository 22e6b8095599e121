//! Support chat handler

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use domain::{ChatResult, ChatTurn, MessageRole, Sentiment};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedJson, state::AppState};

/// Sender of a chat turn
///
/// Mirrors [`MessageRole`] so the OpenAPI schema can be derived here
/// without pulling `utoipa` into the domain crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl From<ChatRole> for MessageRole {
    fn from(role: ChatRole) -> Self {
        match role {
            ChatRole::User => Self::User,
            ChatRole::Assistant => Self::Assistant,
            ChatRole::System => Self::System,
        }
    }
}

/// One turn of the conversation so far
///
/// Wire and schema form of [`ChatTurn`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurnDto {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl From<ChatTurnDto> for ChatTurn {
    fn from(dto: ChatTurnDto) -> Self {
        Self {
            role: dto.role.into(),
            content: dto.content,
            timestamp: dto.timestamp,
        }
    }
}

/// Chat request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChatRequest {
    /// Conversation in order; the last turn must be from the user
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: Vec<ChatTurnDto>,
    /// Accepted for client compatibility and ignored
    #[serde(default)]
    #[allow(dead_code)]
    pub user_id: Option<String>,
}

/// Coarse sentiment of the user's last turn
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SentimentDto {
    pub score: f32,
    pub label: String,
}

impl From<Sentiment> for SentimentDto {
    fn from(sentiment: Sentiment) -> Self {
        Self {
            score: sentiment.score,
            label: sentiment.label.to_string(),
        }
    }
}

/// Chat response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Assistant reply
    pub response: String,
    /// Omitted when the sentiment analysis failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentDto>,
}

impl From<ChatResult> for ChatResponse {
    fn from(result: ChatResult) -> Self {
        Self {
            response: result.response,
            sentiment: result.sentiment.map(SentimentDto::from),
        }
    }
}

/// Reply to the latest user turn
#[utoipa::path(
    post,
    path = "/api/ai/chat",
    tag = "ai",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Invalid conversation", body = crate::error::ErrorResponse),
        (status = 503, description = "Inference service failed", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(turns = request.messages.len()))]
pub async fn chat(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let turns: Vec<ChatTurn> = request.messages.into_iter().map(ChatTurn::from).collect();
    let result = state.conversation_service.chat(&turns).await?;
    Ok(Json(result.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserialize() {
        let json = r#"{"messages": [{"role": "user", "content": "Hello"}]}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, ChatRole::User);
        assert!(request.user_id.is_none());
    }

    #[test]
    fn chat_request_accepts_timestamp_and_user_id() {
        let json = r#"{
            "messages": [{"role": "user", "content": "Hi", "timestamp": "2024-05-01T10:00:00Z"}],
            "user_id": "abc"
        }"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert!(request.messages[0].timestamp.is_some());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{"messages": [{"role": "narrator", "content": "Hi"}]}"#;
        assert!(serde_json::from_str::<ChatRequest>(json).is_err());
    }

    #[test]
    fn empty_messages_fail_validation() {
        let request: ChatRequest = serde_json::from_str(r#"{"messages": []}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn response_omits_missing_sentiment() {
        let response = ChatResponse::from(ChatResult {
            response: "Hi".into(),
            sentiment: None,
        });
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"response":"Hi"}"#);
    }

    #[test]
    fn sentiment_label_is_lowercase() {
        let dto = SentimentDto::from(Sentiment::from_crisis_flag(true));
        assert_eq!(dto.label, "negative");
    }
}
