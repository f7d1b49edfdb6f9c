use serde::{Deserialize, Serialize};

use super::domain::{
    AirportCode, DestinationId, Month, Preferences, DEFAULT_DURATION_MAX, DEFAULT_DURATION_MIN,
};

/// Shared links clamp durations into this window.
pub const SHARE_DURATION_FLOOR: u32 = 3;
pub const SHARE_DURATION_CEILING: u32 = 21;

/// The subset of preferences carried by a shared destination link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareParams {
    pub month: Option<Month>,
    pub airport: Option<AirportCode>,
    pub duration_min: Option<u32>,
    pub duration_max: Option<u32>,
}

/// Raw query parameters as they appear on a share link.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareQuery {
    #[serde(default)]
    pub m: Option<String>,
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
}

impl ShareParams {
    /// Decode `m`, `a` and `d` parameters, ignoring anything invalid.
    pub fn decode(query: &str) -> Self {
        let mut raw = ShareQuery::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = Some(value.to_string());
            match key {
                "m" => raw.m = value,
                "a" => raw.a = value,
                "d" => raw.d = value,
                _ => {}
            }
        }
        Self::from_query(&raw)
    }

    pub fn from_query(query: &ShareQuery) -> Self {
        let month = query.m.as_deref().and_then(Month::parse);
        let airport = query
            .a
            .as_deref()
            .map(AirportCode::new)
            .filter(AirportCode::is_known_hub);

        let (duration_min, duration_max) = match query.d.as_deref().and_then(parse_range) {
            Some((min, max)) => (Some(clamp_duration(min)), Some(clamp_duration(max))),
            None => (None, None),
        };

        Self {
            month,
            airport,
            duration_min,
            duration_max,
        }
    }

    pub fn apply(&self, preferences: &mut Preferences) {
        if let Some(month) = self.month {
            preferences.travel_month = month;
        }
        if let Some(airport) = &self.airport {
            preferences.home_airport = airport.clone();
        }
        if let Some(min) = self.duration_min {
            preferences.duration_min = min;
        }
        if let Some(max) = self.duration_max {
            preferences.duration_max = max;
        }
    }
}

/// Encode month, airport and a non-default duration range as query parameters.
pub fn encode(preferences: &Preferences) -> String {
    let mut params = vec![
        format!("m={}", preferences.travel_month.code()),
        format!("a={}", preferences.home_airport),
    ];

    if preferences.duration_min != DEFAULT_DURATION_MIN
        || preferences.duration_max != DEFAULT_DURATION_MAX
    {
        params.push(format!(
            "d={}-{}",
            preferences.duration_min, preferences.duration_max
        ));
    }

    params.join("&")
}

pub fn share_path(destination: &DestinationId, preferences: &Preferences) -> String {
    format!("/destination/{}?{}", destination, encode(preferences))
}

/// Reads the first two `-` separated pieces; an empty piece counts as zero.
fn parse_range(raw: &str) -> Option<(i64, i64)> {
    let mut pieces = raw.split('-').map(parse_bound);
    let min = pieces.next()??;
    let max = pieces.next()??;
    Some((min, max))
}

fn parse_bound(piece: &str) -> Option<i64> {
    let piece = piece.trim();
    if piece.is_empty() {
        return Some(0);
    }
    piece.parse().ok()
}

fn clamp_duration(value: i64) -> u32 {
    let clamped = value.clamp(
        i64::from(SHARE_DURATION_FLOOR),
        i64::from(SHARE_DURATION_CEILING),
    );
    u32::try_from(clamped).unwrap_or(SHARE_DURATION_FLOOR)
}
