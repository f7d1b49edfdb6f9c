use serde::Serialize;

use super::domain::{
    AirportCode, Choice, Preferences, DEFAULT_DURATION_MAX, DEFAULT_DURATION_MIN,
    DEFAULT_HOME_AIRPORT, DEFAULT_TRAVEL_MONTH,
};

/// Preference a filter chip resets when cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    TravelMonth,
    RegionPreference,
    TemperaturePreference,
    TypePreference,
    BudgetSensitivity,
    MaxFlightTime,
    DurationRange,
    VisaFreeOnly,
    PreferNewPlaces,
    HomeAirport,
}

impl FilterKey {
    /// Restore the preference this key controls to its default.
    pub fn clear(self, preferences: &mut Preferences) {
        let defaults = Preferences::default();
        match self {
            FilterKey::TravelMonth => preferences.travel_month = defaults.travel_month,
            FilterKey::RegionPreference => preferences.region_preference = Choice::Any,
            FilterKey::TemperaturePreference => preferences.temperature_preference = Choice::Any,
            FilterKey::TypePreference => preferences.type_preference = Choice::Any,
            FilterKey::BudgetSensitivity => {
                preferences.budget_sensitivity = defaults.budget_sensitivity
            }
            FilterKey::MaxFlightTime => preferences.max_flight_time = defaults.max_flight_time,
            FilterKey::DurationRange => {
                preferences.duration_min = defaults.duration_min;
                preferences.duration_max = defaults.duration_max;
            }
            FilterKey::VisaFreeOnly => preferences.visa_free_only = defaults.visa_free_only,
            FilterKey::PreferNewPlaces => {
                preferences.prefer_new_places = defaults.prefer_new_places
            }
            FilterKey::HomeAirport => preferences.home_airport = defaults.home_airport,
        }
    }
}

/// A preference that differs from the defaults, labelled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub label: &'static str,
    pub value: String,
}

impl ActiveFilter {
    pub fn clear(&self, preferences: &mut Preferences) {
        self.key.clear(preferences);
    }
}

pub fn active_filters(preferences: &Preferences) -> Vec<ActiveFilter> {
    let defaults = Preferences::default();
    let mut filters = Vec::new();
    let mut push = |key, label, value: String| filters.push(ActiveFilter { key, label, value });

    if preferences.travel_month != DEFAULT_TRAVEL_MONTH {
        push(
            FilterKey::TravelMonth,
            "Month",
            preferences.travel_month.label().to_string(),
        );
    }

    if let Choice::Only(region) = preferences.region_preference {
        push(
            FilterKey::RegionPreference,
            "Region",
            region.label().to_string(),
        );
    }

    if let Choice::Only(climate) = preferences.temperature_preference {
        push(
            FilterKey::TemperaturePreference,
            "Climate",
            climate.code().to_string(),
        );
    }

    if let Choice::Only(trip_type) = preferences.type_preference {
        push(
            FilterKey::TypePreference,
            "Type",
            trip_type.code().to_string(),
        );
    }

    if preferences.budget_sensitivity != defaults.budget_sensitivity {
        push(
            FilterKey::BudgetSensitivity,
            "Budget",
            preferences.budget_sensitivity.label().to_string(),
        );
    }

    if preferences.has_flight_limit() {
        push(
            FilterKey::MaxFlightTime,
            "Flight",
            format!("< {}h", preferences.max_flight_time),
        );
    }

    if preferences.duration_min != DEFAULT_DURATION_MIN
        || preferences.duration_max != DEFAULT_DURATION_MAX
    {
        push(
            FilterKey::DurationRange,
            "Duration",
            format!("{}-{}d", preferences.duration_min, preferences.duration_max),
        );
    }

    if preferences.visa_free_only {
        push(FilterKey::VisaFreeOnly, "Visa", "Free".to_string());
    }

    if preferences.prefer_new_places != defaults.prefer_new_places {
        let value = if preferences.prefer_new_places {
            "New Only"
        } else {
            "All"
        };
        push(FilterKey::PreferNewPlaces, "Places", value.to_string());
    }

    if preferences.home_airport != AirportCode::new(DEFAULT_HOME_AIRPORT) {
        push(
            FilterKey::HomeAirport,
            "From",
            preferences.home_airport.to_string(),
        );
    }

    filters
}
