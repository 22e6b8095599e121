//! Application services - Use case implementations

mod assessment_service;
mod conversation_service;
mod drafting_service;
mod emotion_service;

pub use assessment_service::AssessmentService;
pub use conversation_service::ConversationService;
pub use drafting_service::DraftingService;
pub use emotion_service::EmotionService;
