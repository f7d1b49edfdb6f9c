//! Destination scoring, filtering, and ranking.
//!
//! The core (`scoring`, `filter`, `ranking`, `advisor`) is a set of pure functions over an
//! immutable catalog, a traveler ledger, and the user's preferences. `service` and `router`
//! put the core behind the persisted state and an HTTP surface.

pub mod active_filters;
pub mod advisor;
pub mod compare;
pub mod domain;
pub mod export;
pub mod filter;
pub mod pricing;
pub mod ranking;
pub mod router;
pub mod scoring;
pub mod service;
pub mod share;
pub mod travelers;

#[cfg(test)]
mod tests;

pub use active_filters::{active_filters, ActiveFilter, FilterKey};
pub use advisor::{
    advise, duration_recommendation, recommend_min_duration, DurationAdvice, DurationStatus,
};
pub use compare::{compare, Comparison, ComparisonColumn, ComparisonHighlights, MAX_COMPARE};
pub use domain::{
    AirportCode, AirportHub, BudgetSensitivity, Choice, Climate, Destination, DestinationId,
    Month, MonthTable, Preferences, Region, Traveler, TravelerData, TravelerId, TripType,
    AIRPORT_HUBS,
};
pub use filter::{exclusion_reason, filter_destinations, is_visa_free, Exclusion};
pub use pricing::{price_for, PriceBand, PriceSummary};
pub use ranking::{rank, RankedDestination};
pub use router::planner_router;
pub use scoring::{
    max_possible_score, score, ScoreBreakdown, ScoreComponent, ScoreFactor, ScoreGrade,
};
pub use service::{
    DestinationDetail, PlannerService, PlannerServiceError, Recommendation, Recommendations,
    VisitUpdate,
};
pub use share::{encode, share_path, ShareParams};
pub use travelers::SelectedTravelers;
