use std::sync::Arc;

use super::common::*;
use crate::catalog::Catalog;
use crate::planner::domain::{DestinationId, Month, Preferences, TravelerId};
use crate::planner::service::{PlannerService, PlannerServiceError, VisitUpdate};
use crate::planner::share::ShareParams;
use crate::store::{PlannerState, StoreError};

#[test]
fn recommend_ranks_saved_preferences() {
    let service = build_service(PlannerState::default());
    let recommendations = service.recommend(None).expect("recommendations");

    assert_eq!(recommendations.candidates, 4);
    assert_eq!(recommendations.results.len(), 4);
    assert_eq!(recommendations.results[0].rank, 1);
    assert_eq!(recommendations.results[0].destination_id.as_str(), "iceland");
    assert!(recommendations.active_filters.is_empty());
    assert_eq!(recommendations.share_query, "m=oct&a=SFO");
    assert!(recommendations.results[2].advice.is_some());
    assert!(recommendations.results[3].advice.is_none());
}

#[test]
fn recommend_honours_overrides_without_saving_them() {
    let service = build_service(PlannerState::default());
    let mut overrides = Preferences::default();
    overrides.max_danger = 1;

    let recommendations = service.recommend(Some(overrides)).expect("recommendations");
    assert_eq!(recommendations.results.len(), 1);
    assert_eq!(recommendations.active_filters.len(), 0);

    let saved = service.preferences().expect("preferences");
    assert_eq!(saved, Preferences::default());
}

#[test]
fn add_traveler_then_record_visit_filters_destination() {
    let service = build_service(PlannerState::default());
    let traveler = service.add_traveler("Ana Maria", false).expect("added");
    assert_eq!(traveler.id.as_str(), "ana-maria");
    assert_eq!(traveler.destinations.len(), 4);

    let duplicate = service.add_traveler("ana  maria", true);
    assert!(matches!(duplicate, Err(PlannerServiceError::TravelerExists(_))));

    let entry = service
        .record_visit(
            &traveler.id,
            &"iceland".into(),
            VisitUpdate {
                has_visited: Some(true),
                rating: Some(12),
            },
        )
        .expect("visit recorded");
    assert!(entry.has_visited);
    assert_eq!(entry.rating, 10);

    let mut preferences = service.preferences().expect("preferences");
    preferences.selected_travelers.insert(traveler.id.clone());
    service
        .update_preferences(preferences)
        .expect("preferences saved");

    let recommendations = service.recommend(None).expect("recommendations");
    assert!(recommendations
        .results
        .iter()
        .all(|entry| entry.destination_id.as_str() != "iceland"));
}

#[test]
fn record_visit_rejects_unknown_ids() {
    let service = build_service(PlannerState::default());
    let err = service
        .record_visit(&"ghost".into(), &"lisbon".into(), VisitUpdate::default())
        .expect_err("unknown traveler");
    assert!(matches!(err, PlannerServiceError::UnknownTraveler(_)));

    service.add_traveler("Sam", false).expect("added");
    let err = service
        .record_visit(
            &TravelerId::new("sam"),
            &"atlantis".into(),
            VisitUpdate::default(),
        )
        .expect_err("unknown destination");
    assert!(matches!(err, PlannerServiceError::UnknownDestination(_)));
}

#[test]
fn blank_traveler_names_are_rejected() {
    let service = build_service(PlannerState::default());
    let err = service.add_traveler("   ", false).expect_err("blank name");
    assert!(matches!(err, PlannerServiceError::InvalidTravelerName));
}

#[test]
fn destination_detail_applies_shared_parameters() {
    let service = build_service(PlannerState::default());
    let shared = ShareParams::decode("m=jul&a=JFK");
    let detail = service
        .destination_detail(&DestinationId::new("lisbon"), Some(&shared))
        .expect("detail");

    assert_close(detail.score.month_match, 0.0);
    assert_eq!(detail.components.len(), 10);
    let advice = detail.advice.expect("JFK flight known");
    assert_eq!(advice.recommended, 5);
    assert_eq!(detail.share_path, "/destination/lisbon?m=jul&a=JFK");
    assert!(detail.excluded_by.is_none());

    let err = service
        .destination_detail(&"atlantis".into(), None)
        .expect_err("unknown destination");
    assert!(matches!(err, PlannerServiceError::UnknownDestination(_)));
}

#[test]
fn compare_defaults_to_saved_list() {
    let mut state = PlannerState::default();
    state.toggle_compare(&"bali".into());
    state.toggle_compare(&"lisbon".into());
    let service = build_service(state);

    let comparison = service.compare(None).expect("comparison");
    assert_eq!(comparison.columns.len(), 2);
    assert_eq!(comparison.columns[0].destination.id.as_str(), "bali");

    let explicit = service
        .compare(Some(vec!["iceland".into()]))
        .expect("comparison");
    assert_eq!(explicit.columns.len(), 1);
}

#[test]
fn share_link_reflects_saved_preferences() {
    let mut state = PlannerState::default();
    state.preferences.travel_month = Month::Dec;
    let service = build_service(state);
    assert_eq!(
        service.share_link(&"bali".into()).expect("link"),
        "/destination/bali?m=dec&a=SFO"
    );
}

#[test]
fn store_failures_surface_as_service_errors() {
    let catalog = Catalog::from_destinations(sample_catalog()).expect("catalog");
    let service = PlannerService::new(Arc::new(catalog), Arc::new(UnavailableStore));

    let err = service.recommend(None).expect_err("store offline");
    assert!(matches!(
        err,
        PlannerServiceError::Store(StoreError::Unavailable(_))
    ));
}
