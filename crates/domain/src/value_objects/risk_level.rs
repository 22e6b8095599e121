//! Ordinal risk level value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword hits needed for a moderate rating
pub const MODERATE_THRESHOLD: u32 = 2;

/// Keyword hits needed for a high rating
pub const HIGH_THRESHOLD: u32 = 4;

/// Screening level for stress, anxiety and depression risk
///
/// Derived from the number of lexicon hits:
/// - High: 4 or more
/// - Moderate: 2-3
/// - Low: 0-1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Map a keyword hit count to a level
    #[must_use]
    pub const fn from_count(count: u32) -> Self {
        if count >= HIGH_THRESHOLD {
            Self::High
        } else if count >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Whether this level warrants a targeted recommendation
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Moderate | Self::High)
    }

    /// Get the wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
