//! End-to-end specifications for the assessment workflow exercised through the
//! public service facade, with the classifier stubbed at the capability boundary.

use std::sync::Arc;

use promotion_ai::workflows::promotion::{
    AssessmentService, AssessmentServiceError, CandidateProfile, Division, Gender, MaritalStatus,
    ModelError, OrdinalEncoderArtifact, PreviousEmployers, PromotionModel, Qualification,
    Recommendation, ValidationError, YesNo,
};

struct FixedOutcomeModel {
    class: u8,
    promotion_probability: f64,
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

fn service(class: u8, promotion_probability: f64) -> AssessmentService {
    let engine = promotion_ai::workflows::promotion::AssessmentEngine::new(
        Arc::new(OrdinalEncoderArtifact::with_form_categories()),
        Arc::new(FixedOutcomeModel {
            class,
            promotion_probability,
        }),
    );
    AssessmentService::new(engine)
}

fn candidate() -> CandidateProfile {
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

#[test]
fn recommended_candidate_reports_verdict_and_confidence() {
    let assessment = service(1, 0.87)
        .assess(&candidate())
        .expect("assessment succeeds");

    assert_eq!(assessment.recommendation, Recommendation::Recommended);
    assert_eq!(
        assessment.recommendation.verdict(),
        "RECOMMENDED FOR PROMOTION"
    );
    assert_eq!(assessment.confidence_percent(), "87.0%");
}

#[test]
fn negative_verdict_keeps_promotion_class_confidence() {
    let assessment = service(0, 0.41)
        .assess(&candidate())
        .expect("assessment succeeds");

    assert_eq!(assessment.recommendation.verdict(), "NOT RECOMMENDED");
    assert_eq!(assessment.confidence_percent(), "41.0%");
}

#[test]
fn validation_failures_surface_before_the_model_runs() {
    let mut out_of_domain = candidate();
    out_of_domain.year_of_recruitment = 1979;

    match service(1, 0.87).assess(&out_of_domain) {
        Err(AssessmentServiceError::Validation(ValidationError::OutOfRange {
            field, ..
        })) => {
            assert_eq!(field, "Year_of_recruitment");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn batch_assessment_preserves_input_order() {
    let service = service(1, 0.6);
    let profiles = vec![candidate(), candidate(), candidate()];

    let assessments = service
        .assess_batch(&profiles)
        .expect("batch assessment succeeds");

    assert_eq!(assessments.len(), 3);
    for assessment in assessments {
        assert_eq!(assessment.recommendation, Recommendation::Recommended);
    }
}
