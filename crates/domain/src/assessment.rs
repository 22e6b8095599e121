//! Wellbeing assessment engine
//!
//! A deterministic keyword screening over free-text answers. It is a
//! heuristic, not a clinical instrument, and performs no I/O.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Lexicon, RiskLevel, WellbeingLevel};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Recommendation texts, in priority order
pub mod recommendations {
    pub const STRESS: &str = "Practice deep breathing exercises or meditation to reduce stress";
    pub const ANXIETY: &str = "Consider mindfulness techniques to manage anxiety";
    pub const DEPRESSION: &str = "Reach out to a mental health professional for support";
    pub const SELF_CARE: &str = "Establish a regular sleep schedule and prioritize self-care";

    /// Appended after the targeted tips
    pub const GENERAL: [&str; 3] = [
        "Engage in regular physical activity",
        "Connect with friends and family regularly",
        "Maintain a balanced diet and stay hydrated",
    ];
}

/// One free-text answer from the questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    #[serde(default)]
    pub answer: String,
}

impl AssessmentAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

/// Lexicon hit totals across all answers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCounts {
    pub stress: u32,
    pub anxiety: u32,
    pub depression: u32,
    pub positive: u32,
}

impl KeywordCounts {
    /// Count lexicon hits answer by answer
    pub fn tally(answers: &[AssessmentAnswer]) -> Self {
        answers.iter().fold(Self::default(), |mut counts, item| {
            let text = item.answer.to_lowercase();
            counts.stress += Lexicon::STRESS.count_hits(&text);
            counts.anxiety += Lexicon::ANXIETY.count_hits(&text);
            counts.depression += Lexicon::DEPRESSION.count_hits(&text);
            counts.positive += Lexicon::POSITIVE.count_hits(&text);
            counts
        })
    }

    /// `positive - (stress + anxiety + depression) / 3`
    #[must_use]
    pub fn overall_score(&self) -> f64 {
        let negative = f64::from(self.stress) + f64::from(self.anxiety) + f64::from(self.depression);
        f64::from(self.positive) - negative / 3.0
    }
}

/// Outcome of a wellbeing screening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub stress_level: RiskLevel,
    pub anxiety_level: RiskLevel,
    pub depression_risk: RiskLevel,
    pub overall_wellbeing: WellbeingLevel,
    pub overall_score: f64,
    /// At most [`MAX_RECOMMENDATIONS`] entries, in priority order
    pub recommendations: Vec<String>,
}

/// Screen a set of answers
pub fn assess(answers: &[AssessmentAnswer]) -> AssessmentResult {
    let counts = KeywordCounts::tally(answers);
    let overall_score = counts.overall_score();

    let stress_level = RiskLevel::from_count(counts.stress);
    let anxiety_level = RiskLevel::from_count(counts.anxiety);
    let depression_risk = RiskLevel::from_count(counts.depression);
    let overall_wellbeing = WellbeingLevel::from_score(overall_score);

    let targeted = [
        (stress_level.is_elevated(), recommendations::STRESS),
        (anxiety_level.is_elevated(), recommendations::ANXIETY),
        (depression_risk.is_elevated(), recommendations::DEPRESSION),
        (overall_wellbeing.needs_self_care(), recommendations::SELF_CARE),
    ];

    // Truncation happens after the general tips are appended, so they are
    // the ones dropped when many targeted tips apply.
    let mut selected: Vec<String> = targeted
        .into_iter()
        .filter_map(|(applies, text)| applies.then_some(text))
        .chain(recommendations::GENERAL)
        .map(String::from)
        .collect();
    selected.truncate(MAX_RECOMMENDATIONS);

    AssessmentResult {
        stress_level,
        anxiety_level,
        depression_risk,
        overall_wellbeing,
        overall_score,
        recommendations: selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(texts: &[&str]) -> Vec<AssessmentAnswer> {
        texts.iter().map(|t| AssessmentAnswer::new(*t)).collect()
    }

    #[test]
    fn three_stress_words_are_moderate() {
        let result = assess(&answers(&[
            "I feel very stressed and overwhelmed and under pressure",
        ]));
        assert_eq!(result.stress_level, RiskLevel::Moderate);
    }

    #[test]
    fn four_stress_words_are_high() {
        let result = assess(&answers(&[
            "I feel very stressed and overwhelmed and under pressure, always tense",
        ]));
        assert_eq!(result.stress_level, RiskLevel::High);
    }

    #[test]
    fn counts_accumulate_across_answers() {
        let counts = KeywordCounts::tally(&answers(&["I worry a lot", "I worry and panic"]));
        assert_eq!(counts.anxiety, 3);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let counts = KeywordCounts::tally(&answers(&["HAPPY and CALM"]));
        assert_eq!(counts.positive, 2);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn no_keywords_gives_good_with_general_tips() {
        let result = assess(&answers(&["I went to school and had lunch"]));
        assert_eq!(result.stress_level, RiskLevel::Low);
        assert_eq!(result.anxiety_level, RiskLevel::Low);
        assert_eq!(result.depression_risk, RiskLevel::Low);
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.overall_wellbeing, WellbeingLevel::Good);
        assert_eq!(result.recommendations, recommendations::GENERAL.to_vec());
    }

    #[test]
    fn empty_input_is_good() {
        let result = assess(&[]);
        assert_eq!(result.overall_wellbeing, WellbeingLevel::Good);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn everything_high_keeps_one_general_tip() {
        let result = assess(&answers(&[
            "stress overwhelm pressure tense strain",
            "anxious worry nervous fear panic",
            "sad depressed hopeless tired exhausted",
        ]));
        assert_eq!(result.stress_level, RiskLevel::High);
        assert_eq!(result.anxiety_level, RiskLevel::High);
        assert_eq!(result.depression_risk, RiskLevel::High);
        assert_eq!(result.overall_wellbeing, WellbeingLevel::Poor);
        assert_eq!(
            result.recommendations,
            vec![
                recommendations::STRESS,
                recommendations::ANXIETY,
                recommendations::DEPRESSION,
                recommendations::SELF_CARE,
                recommendations::GENERAL[0],
            ]
        );
    }

    #[test]
    fn fair_wellbeing_adds_self_care() {
        // one stress hit, nothing positive: score -1/3
        let result = assess(&answers(&["a bit of pressure"]));
        assert_eq!(result.overall_wellbeing, WellbeingLevel::Fair);
        assert_eq!(result.recommendations[0], recommendations::SELF_CARE);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn positive_words_lift_wellbeing() {
        let result = assess(&answers(&["happy, calm and full of joy"]));
        assert_eq!(result.overall_wellbeing, WellbeingLevel::Excellent);
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn levels_are_independent_per_lexicon() {
        let result = assess(&answers(&["stress and pressure, but happy and calm and good"]));
        assert_eq!(result.stress_level, RiskLevel::Moderate);
        assert_eq!(result.anxiety_level, RiskLevel::Low);
        assert_eq!(result.depression_risk, RiskLevel::Low);
        assert_eq!(result.recommendations[0], recommendations::STRESS);
    }

    #[test]
    fn missing_answer_deserializes_as_empty() {
        let item: AssessmentAnswer = serde_json::from_str(r#"{"question":"How are you?"}"#).unwrap();
        assert!(item.answer.is_empty());
    }
}
