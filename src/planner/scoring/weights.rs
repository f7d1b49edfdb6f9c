use serde::{Deserialize, Serialize};

use super::ScoreFactor;

/// Points available for each scoring factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub month_match: u16,
    pub new_place: u16,
    pub personal_rating: u16,
    pub child_friendly: u16,
    pub cost_match: u16,
    pub safety: u16,
    pub duration_match: u16,
    pub flight_time: u16,
    pub climate_match: u16,
    pub type_match: u16,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    month_match: 20,
    new_place: 15,
    personal_rating: 15,
    child_friendly: 12,
    cost_match: 10,
    safety: 8,
    duration_match: 8,
    flight_time: 5,
    climate_match: 4,
    type_match: 3,
};

impl ScoreWeights {
    pub const fn weight(&self, factor: ScoreFactor) -> u16 {
        match factor {
            ScoreFactor::MonthMatch => self.month_match,
            ScoreFactor::NewPlace => self.new_place,
            ScoreFactor::PersonalRating => self.personal_rating,
            ScoreFactor::ChildFriendly => self.child_friendly,
            ScoreFactor::CostMatch => self.cost_match,
            ScoreFactor::Safety => self.safety,
            ScoreFactor::DurationMatch => self.duration_match,
            ScoreFactor::FlightTime => self.flight_time,
            ScoreFactor::ClimateMatch => self.climate_match,
            ScoreFactor::TypeMatch => self.type_match,
        }
    }

    pub const fn total(&self) -> u16 {
        self.month_match
            + self.new_place
            + self.personal_rating
            + self.child_friendly
            + self.cost_match
            + self.safety
            + self.duration_match
            + self.flight_time
            + self.climate_match
            + self.type_match
    }
}

/// Theoretical best total, used as the denominator of every percentage display.
pub fn max_possible_score() -> f64 {
    f64::from(WEIGHTS.total())
}

pub(crate) fn points(factor: ScoreFactor) -> f64 {
    f64::from(WEIGHTS.weight(factor))
}
