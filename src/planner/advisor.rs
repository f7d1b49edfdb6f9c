use serde::{Deserialize, Serialize};

use super::domain::{AirportCode, Destination};

/// Verdict on whether a trip is long enough to justify its flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStatus {
    Good,
    Warning,
    Poor,
}

impl DurationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            DurationStatus::Good => "good",
            DurationStatus::Warning => "warning",
            DurationStatus::Poor => "poor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationAdvice {
    pub status: DurationStatus,
    pub recommended: u32,
    pub message: String,
}

/// Days within this margin below the recommendation earn a warning rather than a poor verdict.
const WARNING_MARGIN_DAYS: u32 = 2;

/// Minimum stay, in days, recommended for a flight of `flight_hours`.
pub fn recommend_min_duration(flight_hours: f64) -> u32 {
    if flight_hours < 4.0 {
        4
    } else if flight_hours < 8.0 {
        5
    } else if flight_hours < 12.0 {
        7
    } else if flight_hours < 16.0 {
        9
    } else {
        10
    }
}

/// Advisory verdict for a trip of `destination_duration` days behind a `flight_hours` flight.
/// The checks run good, then warning, then poor; the first match wins.
pub fn duration_recommendation(destination_duration: u32, flight_hours: f64) -> DurationAdvice {
    let recommended = recommend_min_duration(flight_hours);
    let hours = flight_hours.round();

    if destination_duration >= recommended {
        DurationAdvice {
            status: DurationStatus::Good,
            recommended,
            message: format!("Trip duration is appropriate for a {hours}h flight"),
        }
    } else if destination_duration >= recommended.saturating_sub(WARNING_MARGIN_DAYS) {
        DurationAdvice {
            status: DurationStatus::Warning,
            recommended,
            message: format!("Consider {recommended}+ days for a {hours}h flight"),
        }
    } else {
        DurationAdvice {
            status: DurationStatus::Poor,
            recommended,
            message: format!(
                "{recommended}+ days recommended for {hours}h flight to maximize value"
            ),
        }
    }
}

/// Advice for `destination` from `airport`, `None` when the flight time is unknown.
pub fn advise(destination: &Destination, airport: &AirportCode) -> Option<DurationAdvice> {
    destination
        .flight_hours(airport)
        .map(|hours| duration_recommendation(destination.duration, hours))
}
