use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::migrate::{migrate, STATE_VERSION};
use super::state::PlannerState;

/// Storage abstraction so the planner service can be exercised without touching disk.
pub trait StateStore: Send + Sync {
    fn load(&self) -> Result<PlannerState, StoreError>;
    fn save(&self, state: &PlannerState) -> Result<(), StoreError>;
}

/// Error enumeration for state persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("state document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("state version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("state store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    state: &'a PlannerState,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    state: Value,
}

/// JSON document on disk, wrapped in a `{version, savedAt, state}` envelope.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<PlannerState, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no saved state, starting from defaults");
            return Ok(PlannerState::default());
        }

        let raw = std::fs::read(&self.path)?;
        let envelope: Envelope = serde_json::from_slice(&raw)?;
        if envelope.version < STATE_VERSION {
            info!(
                path = %self.path.display(),
                from = envelope.version,
                to = STATE_VERSION,
                "migrating saved state"
            );
        }

        let state = migrate(envelope.state, envelope.version)?;
        debug!(
            path = %self.path.display(),
            saved_at = ?envelope.saved_at,
            travelers = state.travelers.len(),
            "state loaded"
        );
        Ok(state)
    }

    fn save(&self, state: &PlannerState) -> Result<(), StoreError> {
        let dir = match self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let envelope = EnvelopeRef {
            version: STATE_VERSION,
            saved_at: Utc::now(),
            state,
        };
        let payload = serde_json::to_vec_pretty(&envelope)?;

        // Readers only ever see the previous or the next complete document.
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(&payload)?;
        staged.as_file().sync_all()?;
        staged
            .persist(&self.path)
            .map_err(|err| StoreError::Io(err.error))?;
        debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

/// Process-local store used when no state path is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<PlannerState>,
}

impl MemoryStore {
    pub fn new(state: PlannerState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<PlannerState, StoreError> {
        let guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("state mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, state: &PlannerState) -> Result<(), StoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("state mutex poisoned".to_string()))?;
        *guard = state.clone();
        Ok(())
    }
}
