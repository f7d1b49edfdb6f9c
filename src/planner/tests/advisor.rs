use super::common::*;
use crate::planner::advisor::{
    advise, duration_recommendation, recommend_min_duration, DurationStatus,
};
use crate::planner::domain::AirportCode;

#[test]
fn minimum_stay_steps_with_flight_length() {
    assert_eq!(recommend_min_duration(0.0), 4);
    assert_eq!(recommend_min_duration(3.9), 4);
    assert_eq!(recommend_min_duration(4.0), 5);
    assert_eq!(recommend_min_duration(7.99), 5);
    assert_eq!(recommend_min_duration(8.0), 7);
    assert_eq!(recommend_min_duration(12.0), 9);
    assert_eq!(recommend_min_duration(15.9), 9);
    assert_eq!(recommend_min_duration(16.0), 10);
    assert_eq!(recommend_min_duration(30.0), 10);
}

#[test]
fn five_days_behind_ten_hours_is_a_warning() {
    let advice = duration_recommendation(5, 10.0);
    assert_eq!(advice.recommended, 7);
    assert_eq!(advice.status, DurationStatus::Warning);
    assert_eq!(advice.message, "Consider 7+ days for a 10h flight");
}

#[test]
fn good_is_checked_before_warning() {
    let advice = duration_recommendation(7, 10.0);
    assert_eq!(advice.status, DurationStatus::Good);
    assert_eq!(advice.message, "Trip duration is appropriate for a 10h flight");
}

#[test]
fn short_trips_are_poor() {
    let advice = duration_recommendation(4, 10.4);
    assert_eq!(advice.status, DurationStatus::Poor);
    assert_eq!(
        advice.message,
        "7+ days recommended for 10h flight to maximize value"
    );

    // recommended 4 minus 2 leaves a 2-day warning floor.
    assert_eq!(duration_recommendation(1, 2.0).status, DurationStatus::Poor);
    assert_eq!(duration_recommendation(2, 2.0).status, DurationStatus::Warning);
}

#[test]
fn advice_needs_a_known_flight_time() {
    let lisbon = destination("lisbon");
    let advice = advise(&lisbon, &sfo()).expect("SFO flight known");
    assert_eq!(advice.status, DurationStatus::Good);

    assert!(advise(&lisbon, &AirportCode::new("EZE")).is_none());
}
