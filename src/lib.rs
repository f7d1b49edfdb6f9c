pub mod catalog;
pub mod config;
pub mod error;
pub mod planner;
pub mod store;
pub mod telemetry;
