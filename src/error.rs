use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::planner::PlannerServiceError;
use crate::store::StoreError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Store(StoreError),
    Export(csv::Error),
    Planner(PlannerServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Store(err) => write!(f, "state error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::Planner(err) => write!(f, "planner error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Store(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Planner(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Catalog(CatalogError::Parse(_))
            | AppError::Catalog(CatalogError::DuplicateId(_))
            | AppError::Catalog(CatalogError::Invalid { .. })
            | AppError::Store(StoreError::Malformed(_))
            | AppError::Store(StoreError::UnsupportedVersion { .. }) => StatusCode::BAD_REQUEST,
            AppError::Planner(PlannerServiceError::UnknownDestination(_))
            | AppError::Planner(PlannerServiceError::UnknownTraveler(_)) => StatusCode::NOT_FOUND,
            AppError::Planner(PlannerServiceError::TravelerExists(_)) => StatusCode::CONFLICT,
            AppError::Planner(PlannerServiceError::InvalidTravelerName) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(CatalogError::Io(_))
            | AppError::Store(_)
            | AppError::Export(_)
            | AppError::Planner(PlannerServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}

impl From<PlannerServiceError> for AppError {
    fn from(value: PlannerServiceError) -> Self {
        Self::Planner(value)
    }
}
