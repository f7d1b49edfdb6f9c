//! Persisted planner state: the traveler ledger and preferences, their mutations, and the
//! stores that load and save them.

mod migrate;
mod repository;
mod state;

pub use migrate::{migrate, STATE_VERSION};
pub use repository::{JsonFileStore, MemoryStore, StateStore, StoreError};
pub use state::{slugify, PlannerState};
