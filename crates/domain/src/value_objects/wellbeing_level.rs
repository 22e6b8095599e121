//! Overall wellbeing band

use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall wellbeing derived from the assessment score
///
/// Bands are closed on their lower end:
/// `(-inf, -2)` poor, `[-2, 0)` fair, `[0, 2)` good, `[2, inf)` excellent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellbeingLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl WellbeingLevel {
    /// Map an overall score to its band
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < -2.0 {
            Self::Poor
        } else if score < 0.0 {
            Self::Fair
        } else if score < 2.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }

    /// Poor and fair wellbeing get the self-care recommendation
    #[must_use]
    pub const fn needs_self_care(self) -> bool {
        matches!(self, Self::Poor | Self::Fair)
    }

    /// Get the wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for WellbeingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_below() {
        assert_eq!(WellbeingLevel::from_score(-2.1), WellbeingLevel::Poor);
        assert_eq!(WellbeingLevel::from_score(-2.0), WellbeingLevel::Fair);
        assert_eq!(WellbeingLevel::from_score(-0.1), WellbeingLevel::Fair);
        assert_eq!(WellbeingLevel::from_score(0.0), WellbeingLevel::Good);
        assert_eq!(WellbeingLevel::from_score(1.9), WellbeingLevel::Good);
        assert_eq!(WellbeingLevel::from_score(2.0), WellbeingLevel::Excellent);
    }

    #[test]
    fn self_care_for_poor_and_fair_only() {
        assert!(WellbeingLevel::Poor.needs_self_care());
        assert!(WellbeingLevel::Fair.needs_self_care());
        assert!(!WellbeingLevel::Good.needs_self_care());
        assert!(!WellbeingLevel::Excellent.needs_self_care());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&WellbeingLevel::Excellent).unwrap();
        assert_eq!(json, "\"excellent\"");
    }
}
