use super::super::domain::{BudgetSensitivity, Destination, Preferences, MAX_RATING};
use super::super::travelers::SelectedTravelers;
use super::weights::points;
use super::{ScoreBreakdown, ScoreFactor};

/// Assumed flight length when the catalog has no entry for the home airport.
pub const UNKNOWN_FLIGHT_HOURS: f64 = 15.0;
/// Flights at or beyond this length earn nothing.
pub const FLIGHT_HOURS_CEILING: f64 = 20.0;
/// Safety points lost per danger point above the tolerated maximum.
pub const SAFETY_PENALTY_PER_POINT: f64 = 2.0;
/// Rating fraction used when nobody is selected.
pub const NEUTRAL_RATING_FRACTION: f64 = 0.5;

const STRICT_COST_CEILING: f64 = 8.0;

/// Fraction of the cost weight earned for a destination of the given cost rating.
pub fn budget_multiplier(sensitivity: BudgetSensitivity, cost: u8) -> f64 {
    let cost = scale_value(cost);
    match sensitivity {
        BudgetSensitivity::Flexible => 1.0,
        BudgetSensitivity::Moderate => (10.0 - cost) / 10.0,
        BudgetSensitivity::Strict => ((STRICT_COST_CEILING - cost) / STRICT_COST_CEILING).max(0.0),
    }
}

pub(crate) fn score_destination(
    destination: &Destination,
    preferences: &Preferences,
    selected: &SelectedTravelers<'_>,
) -> ScoreBreakdown {
    let month_match =
        f64::from(destination.best_months.get(preferences.travel_month).min(1))
            * points(ScoreFactor::MonthMatch);

    let new_place = if preferences.prefer_new_places && selected.is_new_to_all(&destination.id)
    {
        points(ScoreFactor::NewPlace)
    } else {
        0.0
    };

    let rating_fraction = selected
        .average_rating(&destination.id)
        .map(|average| average / f64::from(MAX_RATING))
        .unwrap_or(NEUTRAL_RATING_FRACTION);
    let personal_rating = rating_fraction * points(ScoreFactor::PersonalRating);

    let child_friendly = if selected.has_children() {
        scale_value(destination.ease_with_child) / 10.0 * points(ScoreFactor::ChildFriendly)
    } else {
        points(ScoreFactor::ChildFriendly)
    };

    let cost_match = budget_multiplier(preferences.budget_sensitivity, destination.cost)
        * points(ScoreFactor::CostMatch);

    let duration_match = if preferences.duration_fits(destination.duration) {
        points(ScoreFactor::DurationMatch)
    } else {
        0.0
    };

    let flight_hours = destination
        .flight_hours(&preferences.home_airport)
        .unwrap_or(UNKNOWN_FLIGHT_HOURS);
    let flight_time = ((FLIGHT_HOURS_CEILING - flight_hours) / FLIGHT_HOURS_CEILING)
        .clamp(0.0, 1.0)
        * points(ScoreFactor::FlightTime);

    let safety_score = if destination.danger <= preferences.max_danger {
        points(ScoreFactor::Safety)
    } else {
        let over_by = f64::from(destination.danger - preferences.max_danger);
        (points(ScoreFactor::Safety) - over_by * SAFETY_PENALTY_PER_POINT).max(0.0)
    };

    let climate_match = preferences
        .temperature_preference
        .strength(destination.climate)
        .fraction()
        * points(ScoreFactor::ClimateMatch);

    let type_match = preferences
        .type_preference
        .strength(destination.trip_type)
        .fraction()
        * points(ScoreFactor::TypeMatch);

    let total = month_match
        + new_place
        + personal_rating
        + child_friendly
        + cost_match
        + safety_score
        + duration_match
        + flight_time
        + climate_match
        + type_match;

    ScoreBreakdown {
        total,
        month_match,
        new_place,
        personal_rating,
        child_friendly,
        cost_match,
        duration_match,
        flight_time,
        safety_score,
        climate_match,
        type_match,
    }
}

// Ratings live on a 0-10 scale.
fn scale_value(value: u8) -> f64 {
    f64::from(value.min(10))
}
