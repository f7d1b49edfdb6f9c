use std::collections::BTreeMap;

use super::common::*;
use crate::planner::active_filters::{active_filters, FilterKey};
use crate::planner::compare::{compare, MAX_COMPARE};
use crate::planner::domain::{
    AirportCode, BudgetSensitivity, Choice, Climate, Destination, DestinationId, Month,
    MonthTable, Preferences, Region, TripType,
};
use crate::planner::export::write_csv;
use crate::planner::pricing::{price_for, PriceBand, PriceSummary};
use crate::planner::ranking::rank;
use crate::planner::share::{encode, share_path, ShareParams};

fn priced_destination() -> Destination {
    let mut lisbon = destination("lisbon");
    let mut prices = BTreeMap::new();
    prices.insert(
        sfo(),
        MonthTable::from_fn(|month| match month {
            Month::Feb | Month::Nov => 500.0,
            Month::Jul => 1100.0,
            _ => 800.0,
        }),
    );
    lisbon.avg_flight_prices = Some(prices);
    lisbon
}

#[test]
fn price_lookup_is_optional() {
    let lisbon = priced_destination();
    assert_eq!(price_for(&lisbon, &sfo(), Month::Jul), Some(1100.0));
    assert_eq!(price_for(&lisbon, &AirportCode::new("JFK"), Month::Jul), None);
    assert_eq!(price_for(&destination("plain"), &sfo(), Month::Jul), None);
}

#[test]
fn price_summary_bands_months() {
    let summary = PriceSummary::for_airport(&priced_destination(), &sfo()).expect("priced");
    assert_close(summary.min, 500.0);
    assert_close(summary.max, 1100.0);
    assert_close(summary.average, 775.0);
    assert_eq!(summary.cheapest_month, Month::Feb);
    assert_eq!(summary.months.len(), 12);
    assert_eq!(summary.price_in(Month::Nov), Some(500.0));

    let band = |month: Month| {
        summary
            .months
            .iter()
            .find(|entry| entry.month == month)
            .map(|entry| entry.band)
    };
    assert_eq!(band(Month::Feb), Some(PriceBand::Cheaper));
    assert_eq!(band(Month::Oct), Some(PriceBand::Typical));
    assert_eq!(band(Month::Jul), Some(PriceBand::Pricier));

    assert_eq!(PriceBand::classify(42.0, 42.0, 42.0), PriceBand::Typical);
}

#[test]
fn compare_highlights_best_values() {
    let catalog = sample_catalog();
    let ids: Vec<DestinationId> = ["patagonia", "missing", "bali", "iceland", "lisbon"]
        .into_iter()
        .map(DestinationId::from)
        .collect();

    let comparison = compare(&ids, &catalog, &Preferences::default(), &[]);
    assert_eq!(comparison.columns.len(), MAX_COMPARE);
    let order: Vec<&str> = comparison
        .columns
        .iter()
        .map(|column| column.destination.id.as_str())
        .collect();
    assert_eq!(order, ["patagonia", "bali", "iceland"]);

    assert_close(comparison.best.score.expect("score"), 87.0);
    assert_eq!(comparison.best.flight_hours, Some(6.0));
    assert_eq!(comparison.best.cost, Some(4));
    assert_eq!(comparison.best.safety, Some(9));
    assert_eq!(comparison.columns[1].flight_hours, None);
    assert!(comparison.is_best_score(&comparison.columns[2]));
    assert!(!comparison.is_best_score(&comparison.columns[0]));
}

#[test]
fn defaults_have_no_active_filters() {
    assert!(active_filters(&Preferences::default()).is_empty());
}

#[test]
fn active_filters_list_changes_in_display_order() {
    let mut preferences = Preferences::default();
    preferences.home_airport = "JFK".into();
    preferences.visa_free_only = true;
    preferences.max_flight_time = 8.0;
    preferences.region_preference = Choice::Only(Region::EastAsia);
    preferences.temperature_preference = Choice::Only(Climate::Hot);
    preferences.budget_sensitivity = BudgetSensitivity::Strict;
    preferences.travel_month = Month::Mar;
    preferences.duration_min = 3;

    let filters = active_filters(&preferences);
    let keys: Vec<FilterKey> = filters.iter().map(|filter| filter.key).collect();
    assert_eq!(
        keys,
        [
            FilterKey::TravelMonth,
            FilterKey::RegionPreference,
            FilterKey::TemperaturePreference,
            FilterKey::BudgetSensitivity,
            FilterKey::MaxFlightTime,
            FilterKey::DurationRange,
            FilterKey::VisaFreeOnly,
            FilterKey::HomeAirport,
        ]
    );
    assert_eq!(filters[0].value, "March");
    assert_eq!(filters[2].value, "Hot");
    assert_eq!(filters[4].value, "< 8h");
    assert_eq!(filters[5].value, "3-9d");

    for filter in &filters {
        filter.clear(&mut preferences);
    }
    assert_eq!(preferences, Preferences::default());
}

#[test]
fn active_filters_show_climate_and_type_codes() {
    let mut preferences = Preferences::default();
    preferences.temperature_preference = Choice::Only(Climate::Temperate);
    preferences.type_preference = Choice::Only(TripType::Nature);

    let values: Vec<(&str, String)> = active_filters(&preferences)
        .into_iter()
        .map(|filter| (filter.label, filter.value))
        .collect();
    assert_eq!(
        values,
        [
            ("Climate", "Temperate".to_string()),
            ("Type", "Nature".to_string()),
        ]
    );
}

#[test]
fn share_links_encode_non_default_duration_only() {
    let mut preferences = Preferences::default();
    assert_eq!(encode(&preferences), "m=oct&a=SFO");

    preferences.duration_min = 10;
    preferences.duration_max = 14;
    preferences.travel_month = Month::Apr;
    assert_eq!(
        share_path(&"kyoto".into(), &preferences),
        "/destination/kyoto?m=apr&a=SFO&d=10-14"
    );
}

#[test]
fn share_decoding_ignores_invalid_pieces_and_clamps() {
    let params = ShareParams::decode("?m=jul&a=NRT&d=1-40");
    assert_eq!(params.month, Some(Month::Jul));
    assert_eq!(params.airport, Some(AirportCode::new("NRT")));
    assert_eq!(params.duration_min, Some(3));
    assert_eq!(params.duration_max, Some(21));

    let params = ShareParams::decode("m=smarch&a=XXX&d=abc&junk");
    assert_eq!(params, ShareParams::default());

    let params = ShareParams::decode("d=-5-10");
    assert_eq!(params.duration_min, Some(3));
    assert_eq!(params.duration_max, Some(5));

    let params = ShareParams::decode("d=6-9-12");
    assert_eq!(params.duration_min, Some(6));
    assert_eq!(params.duration_max, Some(9));

    let mut preferences = Preferences::default();
    ShareParams::decode("a=LHR").apply(&mut preferences);
    assert_eq!(preferences.home_airport.as_str(), "LHR");
    assert_eq!(preferences.travel_month, Month::Oct);
}

#[test]
fn csv_export_writes_ranked_rows() {
    let catalog = sample_catalog();
    let preferences = Preferences::default();
    let ranked = rank(&catalog, &preferences, &[]);

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &ranked, &preferences).expect("csv written");
    let output = String::from_utf8(buffer).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines[0],
        "rank,id,name,total,percentage,grade,flight_hours,advice"
    );
    assert_eq!(lines[1], "1,iceland,Iceland Ring Road,87.0,87,A,6.0,good");
    assert!(lines[4].starts_with("4,bali,Bali Retreat,"));
    assert!(lines[4].ends_with(",65,C,,"));
    assert_eq!(lines.len(), 5);
}
