//! Two-point sentiment signal attached to chat replies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score reported when the analysis flagged a crisis
pub const CRISIS_SCORE: f32 = -0.7;

/// Score reported for every other successful analysis
pub const NEUTRAL_SCORE: f32 = -0.3;

/// Sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => f.write_str("negative"),
            Self::Neutral => f.write_str("neutral"),
        }
    }
}

/// Coarse sentiment derived solely from the crisis flag
///
/// This is not a continuous sentiment model: there are exactly two
/// possible values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Score in `[-1, 1]`
    pub score: f32,
    /// Label matching the score
    pub label: SentimentLabel,
}

impl Sentiment {
    /// Derive the sentiment for a crisis flag
    #[must_use]
    pub const fn from_crisis_flag(crisis_detected: bool) -> Self {
        if crisis_detected {
            Self {
                score: CRISIS_SCORE,
                label: SentimentLabel::Negative,
            }
        } else {
            Self {
                score: NEUTRAL_SCORE,
                label: SentimentLabel::Neutral,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn crisis_maps_to_negative() {
        let sentiment = Sentiment::from_crisis_flag(true);
        assert_eq!(sentiment.score, -0.7);
        assert_eq!(sentiment.label, SentimentLabel::Negative);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn no_crisis_maps_to_neutral() {
        let sentiment = Sentiment::from_crisis_flag(false);
        assert_eq!(sentiment.score, -0.3);
        assert_eq!(sentiment.label, SentimentLabel::Neutral);
    }

    #[test]
    fn serialization_uses_lowercase_label() {
        let json = serde_json::to_string(&Sentiment::from_crisis_flag(true)).unwrap();
        assert!(json.contains("\"label\":\"negative\""));
        assert!(json.contains("-0.7"));
    }
}
