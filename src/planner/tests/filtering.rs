use super::common::*;
use crate::planner::domain::{Choice, Climate, Destination, Region, TripType};
use crate::planner::filter::{exclusion_reason, filter_destinations, is_visa_free, Exclusion};
use crate::planner::travelers::SelectedTravelers;

fn ids(destinations: &[&Destination]) -> Vec<String> {
    destinations
        .iter()
        .map(|destination| destination.id.to_string())
        .collect()
}

#[test]
fn default_preferences_keep_the_whole_sample() {
    let catalog = sample_catalog();
    let kept = filter_destinations(&catalog, &Default::default(), &[]);
    assert_eq!(ids(&kept), ["lisbon", "patagonia", "bali", "iceland"]);
}

#[test]
fn search_matches_names_countries_regions_and_tags() {
    let catalog = sample_catalog();
    let mut preferences = selecting(&[]);

    preferences.search_query = "CHILE".to_string();
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["patagonia"]
    );

    preferences.search_query = "southeast".to_string();
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["bali"]
    );

    preferences.search_query = "food".to_string();
    assert_eq!(filter_destinations(&catalog, &preferences, &[]).len(), 4);

    preferences.search_query = "   ".to_string();
    assert_eq!(filter_destinations(&catalog, &preferences, &[]).len(), 4);

    preferences.search_query = "atlantis".to_string();
    assert!(filter_destinations(&catalog, &preferences, &[]).is_empty());
}

#[test]
fn search_matches_names_and_itinerary_summaries() {
    let mut catalog = sample_catalog();
    catalog[2].itinerary_summary = "Rice terraces and a glacier-free lagoon swim".to_string();
    let mut preferences = selecting(&[]);

    preferences.search_query = "ring road".to_string();
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["iceland"]
    );

    preferences.search_query = "Rice Terraces".to_string();
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["bali"]
    );

    preferences.search_query = "coastal day trip".to_string();
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["lisbon", "patagonia", "iceland"]
    );
}

#[test]
fn duration_and_danger_bounds_are_inclusive() {
    let catalog = sample_catalog();
    let mut preferences = selecting(&[]);
    preferences.duration_min = 9;
    preferences.duration_max = 9;
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["patagonia"]
    );

    let mut preferences = selecting(&[]);
    preferences.max_danger = 1;
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["iceland"]
    );
}

#[test]
fn visa_filter_uses_text_markers() {
    let lisbon = destination("lisbon");
    let mut preferences = selecting(&[]);
    let selected = SelectedTravelers::resolve(&[], &preferences);
    assert_eq!(exclusion_reason(&lisbon, &preferences, &selected), None);

    preferences.visa_free_only = true;
    assert_eq!(
        exclusion_reason(&lisbon, &preferences, &selected),
        Some(Exclusion::VisaRequired)
    );

    assert!(is_visa_free("VISA NOT REQUIRED for short stays"));
    assert!(is_visa_free("Visa-free for 30 days"));
    assert!(!is_visa_free("Visa on arrival"));

    let catalog = sample_catalog();
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["bali", "iceland"]
    );
}

#[test]
fn climate_and_type_admit_mixed_destinations() {
    let catalog = sample_catalog();
    let mut preferences = selecting(&[]);
    preferences.temperature_preference = Choice::Only(Climate::Cold);
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["patagonia", "iceland"]
    );

    let mut preferences = selecting(&[]);
    preferences.type_preference = Choice::Only(TripType::Urban);
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["lisbon", "bali"]
    );
}

#[test]
fn region_requires_exact_match() {
    let mut catalog = sample_catalog();
    catalog[0].region = None;

    let mut preferences = selecting(&[]);
    preferences.region_preference = Choice::Only(Region::SouthernEurope);
    assert!(filter_destinations(&catalog, &preferences, &[]).is_empty());

    preferences.region_preference = Choice::Only(Region::NorthernEurope);
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["iceland"]
    );
}

#[test]
fn unknown_flight_time_is_never_excluded() {
    let catalog = sample_catalog();
    let mut preferences = selecting(&[]);
    preferences.max_flight_time = 8.0;

    // bali has no SFO entry; iceland is 6h.
    assert_eq!(
        ids(&filter_destinations(&catalog, &preferences, &[])),
        ["bali", "iceland"]
    );

    let lisbon = destination("lisbon");
    let selected = SelectedTravelers::resolve(&[], &preferences);
    assert_eq!(
        exclusion_reason(&lisbon, &preferences, &selected),
        Some(Exclusion::FlightTooLong {
            hours: 10.0,
            max_hours: 8.0
        })
    );
}

#[test]
fn visited_destinations_drop_only_with_a_selection() {
    let catalog = sample_catalog();
    let travelers = vec![
        with_entry(traveler("ana", false), "lisbon", true, 8),
        traveler("ben", false),
    ];

    let kept = filter_destinations(&catalog, &selecting(&[]), &travelers);
    assert_eq!(kept.len(), 4);

    let kept = filter_destinations(&catalog, &selecting(&["ben"]), &travelers);
    assert_eq!(kept.len(), 4);

    let preferences = selecting(&["ana", "ben"]);
    let kept = filter_destinations(&catalog, &preferences, &travelers);
    assert_eq!(ids(&kept), ["patagonia", "bali", "iceland"]);

    let selected = SelectedTravelers::resolve(&travelers, &preferences);
    assert_eq!(
        exclusion_reason(&catalog[0], &preferences, &selected),
        Some(Exclusion::AlreadyVisited {
            traveler: "ana".into()
        })
    );

    let mut revisit = preferences.clone();
    revisit.prefer_new_places = false;
    assert_eq!(filter_destinations(&catalog, &revisit, &travelers).len(), 4);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = sample_catalog();
    let travelers = vec![with_entry(traveler("ana", false), "bali", true, 8)];
    let mut preferences = selecting(&["ana"]);
    preferences.max_flight_time = 12.0;
    preferences.temperature_preference = Choice::Only(Climate::Temperate);

    let once = filter_destinations(&catalog, &preferences, &travelers);
    let twice = filter_destinations(once.iter().copied(), &preferences, &travelers);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn first_failing_rule_is_reported() {
    let mut lisbon = destination("lisbon");
    lisbon.duration = 20;
    lisbon.danger = 9;

    let preferences = selecting(&[]);
    let selected = SelectedTravelers::resolve(&[], &preferences);
    let reason = exclusion_reason(&lisbon, &preferences, &selected).expect("excluded");
    assert!(matches!(reason, Exclusion::DurationOutOfRange { duration: 20, .. }));
    assert_eq!(reason.summary(), "20 day trip outside 6-9 days");
}
