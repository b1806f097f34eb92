use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::{profile, service_with};
use crate::workflows::promotion::domain::FEATURE_COLUMNS;
use crate::workflows::promotion::router::assessment_router;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn assess_endpoint_returns_verdict_and_confidence() {
    let router = assessment_router(Arc::new(service_with(1, 0.87)));
    let payload = serde_json::to_string(&profile()).expect("profile serializes");

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/promotion/assess")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["verdict"], "RECOMMENDED FOR PROMOTION");
    assert_eq!(body["confidence"], "87.0%");
    assert_eq!(body["promotion_probability"], 0.87);
}

#[tokio::test]
async fn assess_endpoint_rejects_out_of_domain_submission() {
    let router = assessment_router(Arc::new(service_with(1, 0.87)));
    let mut candidate = profile();
    candidate.trainings_attended = 1;
    let payload = serde_json::to_string(&candidate).expect("profile serializes");

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/promotion/assess")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    let message = body["error"].as_str().expect("error message present");
    assert!(message.contains("Trainings_Attended"));
}

#[tokio::test]
async fn schema_endpoint_describes_every_column_in_order() {
    let router = assessment_router(Arc::new(service_with(0, 0.1)));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/promotion/schema")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    let columns: Vec<&str> = body["columns"]
        .as_array()
        .expect("columns array")
        .iter()
        .map(|value| value.as_str().expect("column name"))
        .collect();
    assert_eq!(columns, FEATURE_COLUMNS);

    let fields = body["fields"].as_array().expect("fields array");
    assert_eq!(fields.len(), FEATURE_COLUMNS.len());
    for (field, column) in fields.iter().zip(FEATURE_COLUMNS) {
        assert_eq!(field["name"], column);
    }
}
