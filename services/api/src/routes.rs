use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;
use travel_planner::error::AppError;
use travel_planner::planner::export::write_csv;
use travel_planner::planner::{planner_router, rank, PlannerService};
use travel_planner::store::StateStore;

pub(crate) fn with_planner_routes<S>(service: Arc<PlannerService<S>>) -> Router
where
    S: StateStore + 'static,
{
    planner_router(Arc::clone(&service))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/export.csv", get(export_endpoint::<S>))
        .layer(Extension(service))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Ranked results for the saved preferences as a CSV download.
pub(crate) async fn export_endpoint<S>(
    Extension(service): Extension<Arc<PlannerService<S>>>,
) -> Result<impl IntoResponse, AppError>
where
    S: StateStore + 'static,
{
    let preferences = service.preferences()?;
    let travelers = service.travelers()?;
    let ranked = rank(service.catalog(), &preferences, &travelers);

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &ranked, &preferences)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"destinations.csv\"",
            ),
        ],
        buffer,
    ))
}
