use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use travel_planner::planner::{AirportCode, DestinationId, Month};
use travel_planner::store::{JsonFileStore, MemoryStore, PlannerState, StateStore, StoreError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// State store picked at startup: a JSON file when a path is configured, memory otherwise.
#[derive(Debug)]
pub(crate) enum ConfiguredStore {
    File(JsonFileStore),
    Memory(MemoryStore),
}

impl ConfiguredStore {
    pub(crate) fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(JsonFileStore::new(path)),
            None => Self::Memory(MemoryStore::default()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::File(store) => store.path().display().to_string(),
            Self::Memory(_) => "memory".to_string(),
        }
    }
}

impl StateStore for ConfiguredStore {
    fn load(&self) -> Result<PlannerState, StoreError> {
        match self {
            Self::File(store) => store.load(),
            Self::Memory(store) => store.load(),
        }
    }

    fn save(&self, state: &PlannerState) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.save(state),
            Self::Memory(store) => store.save(state),
        }
    }
}

pub(crate) fn parse_month(raw: &str) -> Result<Month, String> {
    Month::parse(raw).ok_or_else(|| format!("'{raw}' is not a month code such as jan or oct"))
}

pub(crate) fn parse_airport(raw: &str) -> Result<AirportCode, String> {
    let code = raw.trim().to_ascii_uppercase();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(AirportCode::new(code))
    } else {
        Err(format!("'{raw}' is not a three-letter airport code"))
    }
}

pub(crate) fn parse_destination(raw: &str) -> Result<DestinationId, String> {
    let id = raw.trim();
    if id.is_empty() {
        Err("destination id must not be blank".to_string())
    } else {
        Ok(DestinationId::new(id))
    }
}
