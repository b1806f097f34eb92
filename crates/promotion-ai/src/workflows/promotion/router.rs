use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use super::domain::{
    CandidateProfile, Division, Gender, MaritalStatus, PreviousEmployers, Qualification, YesNo,
    FEATURE_COLUMNS,
};
use super::intake;
use super::service::AssessmentService;

pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/promotion/assess", post(assess_handler))
        .route("/api/v1/promotion/schema", get(schema_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    axum::Json(profile): axum::Json<CandidateProfile>,
) -> Response {
    match service.assess(&profile) {
        Ok(assessment) => {
            let payload = json!({
                "verdict": assessment.recommendation.verdict(),
                "confidence": assessment.confidence_percent(),
                "promotion_probability": assessment.promotion_probability,
                "assessed_at": assessment.assessed_at,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// The form-surface contract: every field with its domain, in assembly order.
pub(crate) async fn schema_handler() -> axum::Json<serde_json::Value> {
    fn options<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> Vec<&'static str> {
        all.iter().map(|value| label(*value)).collect()
    }

    axum::Json(json!({
        "columns": FEATURE_COLUMNS,
        "fields": [
            { "name": "Division", "kind": "enum",
              "options": options(&Division::ALL, Division::label) },
            { "name": "Qualification", "kind": "enum",
              "options": options(&Qualification::ALL, Qualification::label) },
            { "name": "Gender", "kind": "enum",
              "options": options(&Gender::ALL, Gender::label) },
            { "name": "Trainings_Attended", "kind": "integer",
              "min": *intake::TRAININGS_ATTENDED.start(),
              "max": *intake::TRAININGS_ATTENDED.end() },
            { "name": "Year_of_birth", "kind": "integer",
              "min": *intake::YEAR_OF_BIRTH.start(),
              "max": *intake::YEAR_OF_BIRTH.end() },
            { "name": "Last_performance_score", "kind": "number",
              "min": *intake::LAST_PERFORMANCE_SCORE.start(),
              "max": *intake::LAST_PERFORMANCE_SCORE.end(),
              "step": intake::PERFORMANCE_SCORE_STEP },
            { "name": "Year_of_recruitment", "kind": "integer",
              "min": *intake::YEAR_OF_RECRUITMENT.start(),
              "max": *intake::YEAR_OF_RECRUITMENT.end() },
            { "name": "Targets_met", "kind": "enum",
              "options": options(&YesNo::ALL, YesNo::label) },
            { "name": "Previous_Award", "kind": "enum",
              "options": options(&YesNo::ALL, YesNo::label) },
            { "name": "Training_score_average", "kind": "integer",
              "min": *intake::TRAINING_SCORE_AVERAGE.start(),
              "max": *intake::TRAINING_SCORE_AVERAGE.end() },
            { "name": "Foreign_schooled", "kind": "enum",
              "options": options(&YesNo::ALL, YesNo::label) },
            { "name": "Marital_Status", "kind": "enum",
              "options": options(&MaritalStatus::ALL, MaritalStatus::label) },
            { "name": "Past_Disciplinary_Action", "kind": "enum",
              "options": options(&YesNo::ALL, YesNo::label) },
            { "name": "Previous_IntraDepartmental_Movement", "kind": "enum",
              "options": options(&YesNo::ALL, YesNo::label) },
            { "name": "No_of_previous_employers", "kind": "enum",
              "options": options(&PreviousEmployers::ALL, PreviousEmployers::label) },
        ],
    }))
}
