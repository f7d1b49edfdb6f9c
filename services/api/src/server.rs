use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredStore};
use crate::routes::with_planner_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use travel_planner::catalog::Catalog;
use travel_planner::config::AppConfig;
use travel_planner::error::AppError;
use travel_planner::planner::PlannerService;
use travel_planner::store::StateStore;
use travel_planner::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.planner.catalog_path = catalog;
    }
    if let Some(state) = args.state.take() {
        config.planner.state_path = Some(state);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(Catalog::from_path(&config.planner.catalog_path)?);
    let store = ConfiguredStore::from_path(config.planner.state_path.clone());
    info!(store = %store.describe(), "planner state store selected");

    // An unreadable state file stops startup.
    let state = store.load()?;
    info!(travelers = state.travelers.len(), "planner state loaded");

    let planner_service = Arc::new(PlannerService::new(catalog, Arc::new(store)));

    let app = with_planner_routes(planner_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "travel planner ready");

    axum::serve(listener, app).await?;
    Ok(())
}
