use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use promotion_ai::workflows::promotion::{
    CandidateProfile, Division, Gender, LogisticModelArtifact, MaritalStatus,
    OrdinalEncoderArtifact, PreviousEmployers, Qualification, YesNo, FEATURE_COLUMNS,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Demo encoder covering every label the intake form can produce.
pub(crate) fn demo_encoder() -> OrdinalEncoderArtifact {
    OrdinalEncoderArtifact::with_form_categories()
}

/// Demo classifier with hand-tuned coefficients so CLI walkthroughs produce
/// plausible verdicts without the real trained artifact.
pub(crate) fn demo_model() -> LogisticModelArtifact {
    let mut coefficients = vec![0.0; FEATURE_COLUMNS.len()];
    let mut set = |column: &str, weight: f64| {
        let index = FEATURE_COLUMNS
            .iter()
            .position(|name| *name == column)
            .expect("known column");
        coefficients[index] = weight;
    };
    set("Qualification", 0.10);
    set("Trainings_Attended", 0.05);
    set("Last_performance_score", 0.35);
    set("Targets_met", 1.20);
    set("Previous_Award", 0.60);
    set("Training_score_average", 0.02);
    set("Past_Disciplinary_Action", 0.80);
    set("No_of_previous_employers", -0.05);

    LogisticModelArtifact {
        feature_names: FEATURE_COLUMNS.iter().map(|name| name.to_string()).collect(),
        coefficients,
        intercept: -5.0,
    }
}

/// Candidate used when `assess` runs without a profile file.
pub(crate) fn sample_profile() -> CandidateProfile {
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
