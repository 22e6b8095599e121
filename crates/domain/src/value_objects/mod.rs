//! Value Objects - Immutable, identity-less domain primitives

mod lexicon;
mod risk_level;
mod sentiment;
mod wellbeing_level;

pub use lexicon::Lexicon;
pub use risk_level::RiskLevel;
pub use sentiment::{Sentiment, SentimentLabel};
pub use wellbeing_level::WellbeingLevel;
