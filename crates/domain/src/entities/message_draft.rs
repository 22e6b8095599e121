//! Message drafting values

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Authorship tips returned with every draft, in this order
pub const DRAFT_SUGGESTIONS: [&str; 3] = [
    "Be specific about what kind of support you need",
    "Express your feelings using 'I' statements",
    "Thank them for their time and support",
];

/// What the user wants to say and to whom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContext {
    /// Who the message is for, e.g. "teacher" or "parent"
    pub recipient_type: String,
    /// How the user is feeling
    pub emotion: String,
    /// What the user needs from the recipient
    pub need: String,
    /// Optional background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
}

impl MessageContext {
    /// Create a validated context
    pub fn new(
        recipient_type: impl Into<String>,
        emotion: impl Into<String>,
        need: impl Into<String>,
        situation: Option<String>,
    ) -> Result<Self, DomainError> {
        let context = Self {
            recipient_type: recipient_type.into(),
            emotion: emotion.into(),
            need: need.into(),
            situation,
        };
        context.validate()?;
        Ok(context)
    }

    /// Reject blank required fields
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("recipient_type", &self.recipient_type),
            ("emotion", &self.emotion),
            ("need", &self.need),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::missing_field(field));
            }
        }
        Ok(())
    }

    /// Situation text, empty when absent
    #[must_use]
    pub fn situation_or_empty(&self) -> &str {
        self.situation.as_deref().unwrap_or_default()
    }
}

/// A drafted message plus authorship tips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResult {
    /// Model-written draft
    pub draft: String,
    /// Always [`DRAFT_SUGGESTIONS`]
    pub suggestions: Vec<String>,
}

impl DraftResult {
    /// Pair a draft with the fixed suggestions
    pub fn new(draft: impl Into<String>) -> Self {
        Self {
            draft: draft.into(),
            suggestions: DRAFT_SUGGESTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}
