use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::planner::domain::{
    AirportCode, Climate, Destination, DestinationId, MonthTable, Preferences, Region, Traveler,
    TravelerData, TravelerId, TripType,
};
use crate::planner::service::PlannerService;
use crate::store::{MemoryStore, PlannerState, StateStore, StoreError};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn sfo() -> AirportCode {
    AirportCode::new("SFO")
}

/// Destination that passes every default filter: 7 days, danger 2, good in October.
pub(super) fn destination(id: &str) -> Destination {
    let mut flight_times = BTreeMap::new();
    flight_times.insert(sfo(), 10.0);
    flight_times.insert(AirportCode::new("JFK"), 7.0);

    Destination {
        id: DestinationId::new(id),
        name: format!("{id} escape"),
        duration: 7,
        itinerary_summary: "Old town walks and a coastal day trip".to_string(),
        considerations: String::new(),
        visa_requirements: "Visa required in advance".to_string(),
        countries: vec!["Portugal".to_string()],
        region: Some(Region::SouthernEurope),
        climate: Climate::Temperate,
        trip_type: TripType::Urban,
        ease_with_child: 6,
        urgency: 3,
        danger: 2,
        cost: 4,
        flight_times,
        best_months: MonthTable::from_fn(|month| u8::from(month.code() == "oct")),
        best_time_description: "Autumn".to_string(),
        avg_flight_prices: None,
        tags: vec!["food".to_string()],
        image_url: None,
    }
}

pub(super) fn traveler(id: &str, is_child: bool) -> Traveler {
    Traveler::new(TravelerId::new(id), id.to_uppercase(), is_child)
}

pub(super) fn with_entry(
    mut traveler: Traveler,
    destination: &str,
    has_visited: bool,
    rating: u8,
) -> Traveler {
    traveler.destinations.insert(
        DestinationId::new(destination),
        TravelerData {
            has_visited,
            rating,
        },
    );
    traveler
}

pub(super) fn selecting(ids: &[&str]) -> Preferences {
    let mut preferences = Preferences::default();
    preferences.selected_travelers = ids.iter().map(|id| TravelerId::new(*id)).collect();
    preferences
}

/// Small catalog covering the climate, type, region, and visa variations.
pub(super) fn sample_catalog() -> Vec<Destination> {
    let lisbon = destination("lisbon");

    let mut patagonia = destination("patagonia");
    patagonia.name = "Patagonia Trek".to_string();
    patagonia.duration = 9;
    patagonia.countries = vec!["Argentina".to_string(), "Chile".to_string()];
    patagonia.region = Some(Region::SouthAmerica);
    patagonia.climate = Climate::Cold;
    patagonia.trip_type = TripType::Nature;
    patagonia.cost = 8;
    patagonia.flight_times.insert(sfo(), 14.0);

    let mut bali = destination("bali");
    bali.name = "Bali Retreat".to_string();
    bali.countries = vec!["Indonesia".to_string()];
    bali.region = Some(Region::SoutheastAsia);
    bali.climate = Climate::Hot;
    bali.trip_type = TripType::Mix;
    bali.visa_requirements = "Visa-free for 30 days".to_string();
    bali.flight_times.remove(&sfo());
    bali.best_months = MonthTable::uniform(0);

    let mut iceland = destination("iceland");
    iceland.name = "Iceland Ring Road".to_string();
    iceland.countries = vec!["Iceland".to_string()];
    iceland.region = Some(Region::NorthernEurope);
    iceland.climate = Climate::Mix;
    iceland.trip_type = TripType::Nature;
    iceland.danger = 1;
    iceland.flight_times.insert(sfo(), 6.0);
    iceland.visa_requirements = "No visa needed for US citizens".to_string();

    vec![lisbon, patagonia, bali, iceland]
}

pub(super) fn build_service(state: PlannerState) -> PlannerService<MemoryStore> {
    let catalog = Catalog::from_destinations(sample_catalog()).expect("sample catalog is valid");
    PlannerService::new(Arc::new(catalog), Arc::new(MemoryStore::new(state)))
}

pub(super) struct UnavailableStore;

impl StateStore for UnavailableStore {
    fn load(&self) -> Result<PlannerState, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn save(&self, _state: &PlannerState) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
