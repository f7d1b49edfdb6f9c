use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{DestinationId, Preferences, TravelerId};
use super::service::{PlannerService, PlannerServiceError, VisitUpdate};
use super::share::{ShareParams, ShareQuery};
use crate::store::StateStore;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(default)]
    pub(crate) preferences: Option<Preferences>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewTravelerRequest {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) is_child: bool,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompareQuery {
    /// Comma-separated destination ids; the saved compare list is used when absent.
    #[serde(default)]
    pub(crate) ids: Option<String>,
}

/// Router builder exposing the planner's HTTP endpoints.
pub fn planner_router<S>(service: Arc<PlannerService<S>>) -> Router
where
    S: StateStore + 'static,
{
    Router::new()
        .route("/api/v1/destinations", get(destinations_handler::<S>))
        .route(
            "/api/v1/destinations/:destination_id",
            get(destination_handler::<S>),
        )
        .route(
            "/api/v1/recommendations",
            post(recommendations_handler::<S>),
        )
        .route(
            "/api/v1/preferences",
            get(preferences_handler::<S>).put(update_preferences_handler::<S>),
        )
        .route("/api/v1/compare", get(compare_handler::<S>))
        .route("/api/v1/travelers", post(add_traveler_handler::<S>))
        .route(
            "/api/v1/travelers/:traveler_id/destinations/:destination_id",
            put(record_visit_handler::<S>),
        )
        .route("/api/v1/share/:destination_id", get(share_handler::<S>))
        .with_state(service)
}

pub(crate) async fn destinations_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    (StatusCode::OK, Json(service.catalog().as_slice())).into_response()
}

pub(crate) async fn recommendations_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    request: Option<Json<RecommendationRequest>>,
) -> Response
where
    S: StateStore + 'static,
{
    // A bodyless POST ranks with the saved preferences.
    let overrides = request.and_then(|Json(request)| request.preferences);
    match service.recommend(overrides) {
        Ok(recommendations) => (StatusCode::OK, Json(recommendations)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn destination_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    Path(destination_id): Path<String>,
    Query(query): Query<ShareQuery>,
) -> Response
where
    S: StateStore + 'static,
{
    let shared = ShareParams::from_query(&query);
    let id = DestinationId::new(destination_id);
    match service.destination_detail(&id, Some(&shared)) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preferences_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.preferences() {
        Ok(preferences) => (StatusCode::OK, Json(preferences)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_preferences_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    Json(preferences): Json<Preferences>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.update_preferences(preferences) {
        Ok(preferences) => (StatusCode::OK, Json(preferences)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compare_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    Query(query): Query<CompareQuery>,
) -> Response
where
    S: StateStore + 'static,
{
    let ids = query.ids.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(DestinationId::from)
            .collect()
    });

    match service.compare(ids) {
        Ok(comparison) => (StatusCode::OK, Json(comparison)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_traveler_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    Json(request): Json<NewTravelerRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.add_traveler(&request.name, request.is_child) {
        Ok(traveler) => (StatusCode::CREATED, Json(traveler)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_visit_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    Path((traveler_id, destination_id)): Path<(String, String)>,
    Json(update): Json<VisitUpdate>,
) -> Response
where
    S: StateStore + 'static,
{
    let traveler = TravelerId::new(traveler_id);
    let destination = DestinationId::new(destination_id);
    match service.record_visit(&traveler, &destination, update) {
        Ok(entry) => (StatusCode::OK, Json(entry)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn share_handler<S>(
    State(service): State<Arc<PlannerService<S>>>,
    Path(destination_id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    let id = DestinationId::new(destination_id);
    match service.share_link(&id) {
        Ok(path) => (StatusCode::OK, Json(json!({ "path": path }))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PlannerServiceError) -> Response {
    let status = match &error {
        PlannerServiceError::UnknownDestination(_) | PlannerServiceError::UnknownTraveler(_) => {
            StatusCode::NOT_FOUND
        }
        PlannerServiceError::TravelerExists(_) => StatusCode::CONFLICT,
        PlannerServiceError::InvalidTravelerName => StatusCode::UNPROCESSABLE_ENTITY,
        PlannerServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
