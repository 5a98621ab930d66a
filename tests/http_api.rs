//! Router-level specifications exercising the public HTTP surface through
//! tower's `oneshot`, without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower::util::ServiceExt;

use nutriscan::screening::ScreeningEngine;
use nutriscan::server::{build_router, AppState};
use nutriscan::storage::InMemoryArchive;

fn metrics_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

fn test_state() -> (AppState, Arc<InMemoryArchive>) {
    let archive = Arc::new(InMemoryArchive::new());
    let state = AppState::new(ScreeningEngine::standard(), metrics_handle(), archive.clone());
    state.mark_ready();
    (state, archive)
}

fn submission_body() -> serde_json::Value {
    serde_json::json!({
        "age": 27,
        "gender": "ذكر",
        "weight": 72.0,
        "height": 180.0,
        "sun_exposure": 1.0,
        "activity_level": "خفيف",
        "diet_type": "نباتي",
        "symptoms": "التعب والإرهاق, الدوخة",
        "chronic_diseases": "لا توجد أمراض مزمنة",
        "medications": "",
        "vegetables_fruits": "أحياناً",
        "dairy_meat": "نادراً",
        "supplements": "",
        "meals_info": {"count": 2, "breakfast": false, "lunch": true, "dinner": true, "snacks": []},
        "sun_context": "محدود (داخل المباني معظم الوقت)",
        "physical_activities": [],
        "exercise_duration": 0,
        "sleep_info": {"hours": 6.0, "quality": "سيئة"},
        "stress_level": "عالي",
        "meal_components": ["بقوليات"],
        "cooking_methods": ["قلي"]
    })
}

fn post_report(payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/screening/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn healthcheck_responds_ok() {
    let (state, _archive) = test_state();
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn readiness_reflects_the_flag() {
    let archive = Arc::new(InMemoryArchive::new());
    let state = AppState::new(ScreeningEngine::standard(), metrics_handle(), archive);

    let response = build_router(state.clone())
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    state.mark_ready();
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let (state, _archive) = test_state();
    let response = build_router(state)
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set"),
        "text/plain; version=0.0.4"
    );
}

#[tokio::test]
async fn screening_report_round_trips_over_http() {
    let (state, archive) = test_state();
    let response = build_router(state)
        .oneshot(post_report(&submission_body()))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["status"], "success");
    assert_eq!(
        body["vitamin_analysis"]
            .as_array()
            .expect("vitamin table")
            .len(),
        20
    );
    assert_eq!(
        body["vitamin_analysis"][9]["name"],
        "فيتامين B12 (كوبالامين)"
    );
    assert_eq!(body["vitamin_analysis"][9]["status"], "نقص شديد");
    assert_eq!(body["bmi"]["category"], "وزن طبيعي");
    assert_eq!(archive.len(), 1);
}

#[tokio::test]
async fn invalid_demographics_return_unprocessable_entity() {
    let (state, archive) = test_state();
    let mut payload = submission_body();
    payload["weight"] = serde_json::json!(-5.0);

    let response = build_router(state)
        .oneshot(post_report(&payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["field"], "weight");
    assert!(archive.is_empty());
}
