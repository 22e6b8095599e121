//! Assessment service - Keyword wellbeing screening

use domain::{AssessmentAnswer, AssessmentResult, assess};
use tracing::{debug, instrument};

/// Runs the wellbeing screening
///
/// Pure and synchronous; never touches the inference service.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentService;

impl AssessmentService {
    pub const fn new() -> Self {
        Self
    }

    /// Screen a set of questionnaire answers
    #[instrument(skip(self, answers), fields(answers = answers.len()))]
    pub fn assess(&self, answers: &[AssessmentAnswer]) -> AssessmentResult {
        let result = assess(answers);
        debug!(
            stress = %result.stress_level,
            anxiety = %result.anxiety_level,
            depression = %result.depression_risk,
            wellbeing = %result.overall_wellbeing,
            "Assessment completed"
        );
        result
    }
}
