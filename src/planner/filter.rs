use serde::Serialize;

use super::domain::{Climate, Destination, Preferences, Region, Traveler, TravelerId, TripType};
use super::travelers::SelectedTravelers;

const VISA_FREE_MARKERS: [&str; 3] = ["no visa", "visa-free", "visa not required"];

/// Hard eligibility rule a destination failed, reported in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Exclusion {
    SearchMiss {
        query: String,
    },
    DurationOutOfRange {
        duration: u32,
        min: u32,
        max: u32,
    },
    TooDangerous {
        danger: u8,
        max_danger: u8,
    },
    VisaRequired,
    ClimateMismatch {
        climate: Climate,
    },
    TripTypeMismatch {
        trip_type: TripType,
    },
    RegionMismatch {
        region: Option<Region>,
    },
    FlightTooLong {
        hours: f64,
        max_hours: f64,
    },
    AlreadyVisited {
        traveler: TravelerId,
    },
}

impl Exclusion {
    pub fn summary(&self) -> String {
        match self {
            Exclusion::SearchMiss { query } => format!("does not match search \"{query}\""),
            Exclusion::DurationOutOfRange { duration, min, max } => {
                format!("{duration} day trip outside {min}-{max} days")
            }
            Exclusion::TooDangerous { danger, max_danger } => {
                format!("danger {danger} above limit {max_danger}")
            }
            Exclusion::VisaRequired => "visa required".to_string(),
            Exclusion::ClimateMismatch { climate } => {
                format!("climate {} not wanted", climate.label())
            }
            Exclusion::TripTypeMismatch { trip_type } => {
                format!("trip style {} not wanted", trip_type.label())
            }
            Exclusion::RegionMismatch { region } => match region {
                Some(region) => format!("region {} not wanted", region.label()),
                None => "region unknown".to_string(),
            },
            Exclusion::FlightTooLong { hours, max_hours } => {
                format!("{hours:.1}h flight exceeds {max_hours:.1}h limit")
            }
            Exclusion::AlreadyVisited { traveler } => format!("already visited by {traveler}"),
        }
    }
}

/// Keep the destinations that pass every eligibility rule, preserving input order.
pub fn filter_destinations<'a, I>(
    destinations: I,
    preferences: &Preferences,
    travelers: &[Traveler],
) -> Vec<&'a Destination>
where
    I: IntoIterator<Item = &'a Destination>,
{
    let selected = SelectedTravelers::resolve(travelers, preferences);
    filter_selected(destinations, preferences, &selected)
}

pub fn filter_selected<'a, I>(
    destinations: I,
    preferences: &Preferences,
    selected: &SelectedTravelers<'_>,
) -> Vec<&'a Destination>
where
    I: IntoIterator<Item = &'a Destination>,
{
    destinations
        .into_iter()
        .filter(|destination| exclusion_reason(destination, preferences, selected).is_none())
        .collect()
}

/// First rule `destination` fails, or `None` when it is eligible.
pub fn exclusion_reason(
    destination: &Destination,
    preferences: &Preferences,
    selected: &SelectedTravelers<'_>,
) -> Option<Exclusion> {
    if !preferences.search_query.trim().is_empty()
        && !matches_search(destination, &preferences.search_query)
    {
        return Some(Exclusion::SearchMiss {
            query: preferences.search_query.clone(),
        });
    }

    if !preferences.duration_fits(destination.duration) {
        return Some(Exclusion::DurationOutOfRange {
            duration: destination.duration,
            min: preferences.duration_min,
            max: preferences.duration_max,
        });
    }

    if destination.danger > preferences.max_danger {
        return Some(Exclusion::TooDangerous {
            danger: destination.danger,
            max_danger: preferences.max_danger,
        });
    }

    if preferences.visa_free_only && !is_visa_free(&destination.visa_requirements) {
        return Some(Exclusion::VisaRequired);
    }

    if !preferences
        .temperature_preference
        .admits(destination.climate)
    {
        return Some(Exclusion::ClimateMismatch {
            climate: destination.climate,
        });
    }

    if !preferences.type_preference.admits(destination.trip_type) {
        return Some(Exclusion::TripTypeMismatch {
            trip_type: destination.trip_type,
        });
    }

    if !preferences
        .region_preference
        .matches_exactly(destination.region.as_ref())
    {
        return Some(Exclusion::RegionMismatch {
            region: destination.region,
        });
    }

    if preferences.has_flight_limit() {
        // Unknown flight time never excludes.
        if let Some(hours) = destination.flight_hours(&preferences.home_airport) {
            if hours > preferences.max_flight_time {
                return Some(Exclusion::FlightTooLong {
                    hours,
                    max_hours: preferences.max_flight_time,
                });
            }
        }
    }

    if preferences.prefer_new_places && !preferences.selected_travelers.is_empty() {
        if let Some(traveler) = selected.first_visitor(&destination.id) {
            return Some(Exclusion::AlreadyVisited {
                traveler: traveler.id.clone(),
            });
        }
    }

    None
}

/// Whether a visa requirements blurb says no visa is needed.
pub fn is_visa_free(visa_requirements: &str) -> bool {
    let text = visa_requirements.to_lowercase();
    VISA_FREE_MARKERS.iter().any(|marker| text.contains(marker))
}

fn matches_search(destination: &Destination, query: &str) -> bool {
    let query = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&query);

    contains(&destination.name)
        || destination.countries.iter().any(|country| contains(country))
        || contains(&destination.itinerary_summary)
        || destination
            .region
            .map(|region| contains(region.label()))
            .unwrap_or(false)
        || destination.tags.iter().any(|tag| contains(tag))
}
