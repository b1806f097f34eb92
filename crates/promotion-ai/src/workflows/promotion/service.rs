use tracing::info;

use super::domain::CandidateProfile;
use super::inference::verdict::Assessment;
use super::inference::{AssessmentEngine, AssessmentError};
use super::intake::{self, ValidationError};

/// Facade composing intake validation with the inference engine. Stateless: each
/// call is an independent request/response transformation.
pub struct AssessmentService {
    engine: AssessmentEngine,
}

impl AssessmentService {
    pub fn new(engine: AssessmentEngine) -> Self {
        Self { engine }
    }

    /// Validate and assess one submission.
    pub fn assess(
        &self,
        profile: &CandidateProfile,
    ) -> Result<Assessment, AssessmentServiceError> {
        intake::validate(profile)?;
        let assessment = self.engine.assess(profile)?;

        info!(
            verdict = assessment.recommendation.verdict(),
            confidence = %assessment.confidence_percent(),
            "assessment completed"
        );

        Ok(assessment)
    }

    /// Assess an already-imported batch, stopping at the first failure.
    pub fn assess_batch(
        &self,
        profiles: &[CandidateProfile],
    ) -> Result<Vec<Assessment>, AssessmentServiceError> {
        profiles.iter().map(|profile| self.assess(profile)).collect()
    }
}

/// Error raised at the single assessment call boundary.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Inference(#[from] AssessmentError),
}
