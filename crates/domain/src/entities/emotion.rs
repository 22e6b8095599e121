//! Emotion analysis result

use serde::{Deserialize, Serialize};

/// Substrings in the model's own reply that raise the crisis flag
pub const CRISIS_MARKERS: [&str; 2] = ["crisis", "emergency"];

/// Empathetic reflection on the user's text plus a crisis heuristic
///
/// The flag is derived from the reflection, not declared by the model.
/// A reply that avoids the literal marker words is not flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Reflection text produced by the model
    pub analysis: String,
    /// Whether the reflection mentions a crisis marker
    pub crisis_detected: bool,
}

impl EmotionResult {
    /// Build a result from the model's reflection
    pub fn from_analysis(analysis: impl Into<String>) -> Self {
        let analysis = analysis.into();
        let crisis_detected = mentions_crisis(&analysis);
        Self {
            analysis,
            crisis_detected,
        }
    }
}

fn mentions_crisis(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_MARKERS.iter().any(|marker| lower.contains(marker))
}
