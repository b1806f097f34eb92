use std::sync::Arc;

use crate::workflows::promotion::artifacts::OrdinalEncoderArtifact;
use crate::workflows::promotion::domain::{
    CandidateProfile, Division, Gender, MaritalStatus, PreviousEmployers, Qualification, YesNo,
};
use crate::workflows::promotion::inference::{AssessmentEngine, ModelError, PromotionModel};
use crate::workflows::promotion::service::AssessmentService;

/// Baseline profile matching the tool's end-to-end acceptance scenario.
pub(super) fn profile() -> CandidateProfile {
    CandidateProfile {
        division: Division::InformationTechnologyAndSolutionSupport,
        qualification: Qualification::MscMbaAndPhd,
        gender: Gender::Male,
        trainings_attended: 5,
        year_of_birth: 1990,
        last_performance_score: 7.5,
        year_of_recruitment: 2015,
        targets_met: YesNo::Yes,
        previous_award: YesNo::Yes,
        training_score_average: 72,
        foreign_schooled: YesNo::No,
        marital_status: MaritalStatus::Married,
        past_disciplinary_action: YesNo::No,
        previous_intra_departmental_movement: YesNo::No,
        no_of_previous_employers: PreviousEmployers::One,
    }
}

pub(super) fn encoder() -> OrdinalEncoderArtifact {
    OrdinalEncoderArtifact::with_form_categories()
}

/// Classifier stub pinned to one class and promotion probability.
pub(super) struct FixedOutcomeModel {
    pub(super) class: u8,
    pub(super) promotion_probability: f64,
}

impl PromotionModel for FixedOutcomeModel {
    fn predict(&self, _features: &[f64]) -> Result<u8, ModelError> {
        Ok(self.class)
    }

    fn predict_probability(&self, _features: &[f64]) -> Result<[f64; 2], ModelError> {
        Ok([
            1.0 - self.promotion_probability,
            self.promotion_probability,
        ])
    }
}

pub(super) fn engine_with(class: u8, promotion_probability: f64) -> AssessmentEngine {
    AssessmentEngine::new(
        Arc::new(encoder()),
        Arc::new(FixedOutcomeModel {
            class,
            promotion_probability,
        }),
    )
}

pub(super) fn service_with(class: u8, promotion_probability: f64) -> AssessmentService {
    AssessmentService::new(engine_with(class, promotion_probability))
}
