//! Property-based tests for the wellbeing assessment engine
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{
    AssessmentAnswer, KeywordCounts, Lexicon, RiskLevel, WellbeingLevel, assess,
    assessment::{MAX_RECOMMENDATIONS, recommendations},
};
use proptest::prelude::*;

fn answers_strategy() -> impl Strategy<Value = Vec<AssessmentAnswer>> {
    let stems: Vec<&'static str> = [
        Lexicon::STRESS,
        Lexicon::ANXIETY,
        Lexicon::DEPRESSION,
        Lexicon::POSITIVE,
    ]
    .iter()
    .flat_map(|l| l.words().iter().copied())
    .chain(["today", "school", "and", "I", "feel", "very"])
    .collect();

    prop::collection::vec(
        prop::collection::vec(prop::sample::select(stems), 0..12)
            .prop_map(|words| AssessmentAnswer::new(words.join(" "))),
        0..6,
    )
}

// ============================================================================
// Assessment Property Tests
// ============================================================================

mod assessment_tests {
    use super::*;

    proptest! {
        #[test]
        fn recommendations_never_exceed_cap(answers in answers_strategy()) {
            let result = assess(&answers);
            prop_assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
            prop_assert!(result.recommendations.len() >= 3);
        }

        #[test]
        fn levels_follow_counts(answers in answers_strategy()) {
            let counts = KeywordCounts::tally(&answers);
            let result = assess(&answers);
            prop_assert_eq!(result.stress_level, RiskLevel::from_count(counts.stress));
            prop_assert_eq!(result.anxiety_level, RiskLevel::from_count(counts.anxiety));
            prop_assert_eq!(result.depression_risk, RiskLevel::from_count(counts.depression));
            prop_assert_eq!(result.overall_wellbeing, WellbeingLevel::from_score(counts.overall_score()));
        }

        #[test]
        fn targeted_tips_keep_priority_order(answers in answers_strategy()) {
            let result = assess(&answers);
            let order = [
                recommendations::STRESS,
                recommendations::ANXIETY,
                recommendations::DEPRESSION,
                recommendations::SELF_CARE,
                recommendations::GENERAL[0],
                recommendations::GENERAL[1],
                recommendations::GENERAL[2],
            ];
            let positions: Vec<usize> = result
                .recommendations
                .iter()
                .filter_map(|r| order.iter().position(|o| o == r))
                .collect();
            prop_assert_eq!(positions.len(), result.recommendations.len());
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn stress_tip_present_iff_elevated(answers in answers_strategy()) {
            let result = assess(&answers);
            let has_tip = result
                .recommendations
                .iter()
                .any(|r| r == recommendations::STRESS);
            prop_assert_eq!(has_tip, result.stress_level.is_elevated());
        }

        #[test]
        fn assessment_is_case_insensitive(answers in answers_strategy()) {
            let shouted: Vec<AssessmentAnswer> = answers
                .iter()
                .map(|a| AssessmentAnswer::new(a.answer.to_uppercase()))
                .collect();
            prop_assert_eq!(assess(&answers), assess(&shouted));
        }

        #[test]
        fn unrelated_text_scores_zero(text in "[xyz ]{0,64}") {
            let counts = KeywordCounts::tally(&[AssessmentAnswer::new(text)]);
            prop_assert_eq!(counts, KeywordCounts::default());
        }
    }
}
