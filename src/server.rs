use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::screening::{BmiResult, NutrientAssessment, ProfileSubmission, ScreeningEngine};
use crate::storage::{InMemoryArchive, ScreeningArchive, ScreeningRecord};

/// Shared handler state: the stateless engine, the Prometheus render handle
/// and the archive collaborator owned here, never by the scoring core.
#[derive(Clone)]
pub struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    engine: Arc<ScreeningEngine>,
    archive: Arc<dyn ScreeningArchive>,
}

impl AppState {
    pub fn new(
        engine: ScreeningEngine,
        metrics: PrometheusHandle,
        archive: Arc<dyn ScreeningArchive>,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics,
            engine: Arc::new(engine),
            archive,
        }
    }

    pub fn mark_ready(&self) {
        self.readiness.store(true, Ordering::Release);
    }
}

/// Response envelope for a scored submission, shaped like the original
/// questionnaire service's reply.
#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub status: &'static str,
    pub bmi: BmiResult,
    pub analysis: String,
    pub vitamin_analysis: Vec<NutrientAssessment>,
    pub recommendations: String,
}

/// Routes shared by the server and the router-level tests. The Prometheus
/// request-counting layer is attached in [`run`], where the global recorder
/// may be installed exactly once; `/metrics` renders whatever handle the
/// state carries.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/screening/report", post(screening_report_endpoint))
        .with_state(state)
}

pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let engine = ScreeningEngine::standard();
    engine.catalog().verify_complete()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let archive: Arc<dyn ScreeningArchive> = Arc::new(InMemoryArchive::new());
    let state = AppState::new(engine, prometheus_handle, archive);

    let app = build_router(state.clone()).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    state.mark_ready();

    info!(?config.environment, %addr, "nutrient screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn screening_report_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<ProfileSubmission>,
) -> Result<Json<ScreeningResponse>, AppError> {
    let submission_value = serde_json::to_value(&payload)?;
    let report = state.engine.score(payload)?;

    let record = ScreeningRecord {
        stored_at: Utc::now(),
        submission: submission_value,
        report_text: report.render_text(),
    };
    if let Err(err) = state.archive.store(record) {
        warn!(%err, "failed to archive screening record");
    }

    Ok(Json(ScreeningResponse {
        status: "success",
        bmi: report.bmi,
        analysis: report.general_analysis,
        vitamin_analysis: report.nutrient_assessments,
        recommendations: report.general_recommendations,
    }))
}
