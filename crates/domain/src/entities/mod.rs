//! Domain entities - Request-scoped values exchanged with the support services

mod chat_turn;
mod emotion;
mod message_draft;

pub use chat_turn::{ChatResult, ChatTurn, MessageRole, ensure_user_turn_last};
pub use emotion::{CRISIS_MARKERS, EmotionResult};
pub use message_draft::{DRAFT_SUGGESTIONS, DraftResult, MessageContext};
