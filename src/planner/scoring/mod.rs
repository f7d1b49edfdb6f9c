mod rules;
mod weights;

pub use rules::{
    budget_multiplier, FLIGHT_HOURS_CEILING, NEUTRAL_RATING_FRACTION, SAFETY_PENALTY_PER_POINT,
    UNKNOWN_FLIGHT_HOURS,
};
pub use weights::{max_possible_score, ScoreWeights, WEIGHTS};

use super::domain::{Destination, Preferences, Traveler};
use super::travelers::SelectedTravelers;
use serde::{Deserialize, Serialize};

/// Score `destination` for the query. Pure and total: missing optional data falls back to
/// documented defaults instead of failing.
pub fn score(
    destination: &Destination,
    preferences: &Preferences,
    travelers: &[Traveler],
) -> ScoreBreakdown {
    let selected = SelectedTravelers::resolve(travelers, preferences);
    score_selected(destination, preferences, &selected)
}

/// Same as [`score`] with the traveler selection already resolved.
pub fn score_selected(
    destination: &Destination,
    preferences: &Preferences,
    selected: &SelectedTravelers<'_>,
) -> ScoreBreakdown {
    rules::score_destination(destination, preferences, selected)
}

/// The ten weighted factors, in weight table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    MonthMatch,
    NewPlace,
    PersonalRating,
    ChildFriendly,
    CostMatch,
    Safety,
    DurationMatch,
    FlightTime,
    ClimateMatch,
    TypeMatch,
}

impl ScoreFactor {
    pub const ALL: [ScoreFactor; 10] = [
        ScoreFactor::MonthMatch,
        ScoreFactor::NewPlace,
        ScoreFactor::PersonalRating,
        ScoreFactor::ChildFriendly,
        ScoreFactor::CostMatch,
        ScoreFactor::Safety,
        ScoreFactor::DurationMatch,
        ScoreFactor::FlightTime,
        ScoreFactor::ClimateMatch,
        ScoreFactor::TypeMatch,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::MonthMatch => "Good month",
            ScoreFactor::NewPlace => "New place",
            ScoreFactor::PersonalRating => "Interest",
            ScoreFactor::ChildFriendly => "Kid friendly",
            ScoreFactor::CostMatch => "Budget fit",
            ScoreFactor::Safety => "Safety",
            ScoreFactor::DurationMatch => "Duration fit",
            ScoreFactor::FlightTime => "Flight time",
            ScoreFactor::ClimateMatch => "Climate",
            ScoreFactor::TypeMatch => "Trip style",
        }
    }

    pub const fn weight(self) -> u16 {
        WEIGHTS.weight(self)
    }
}

/// Sub-scores for every factor plus their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total: f64,
    pub month_match: f64,
    pub new_place: f64,
    pub personal_rating: f64,
    pub child_friendly: f64,
    pub cost_match: f64,
    pub duration_match: f64,
    pub flight_time: f64,
    pub safety_score: f64,
    pub climate_match: f64,
    pub type_match: f64,
}

impl ScoreBreakdown {
    pub fn points(&self, factor: ScoreFactor) -> f64 {
        match factor {
            ScoreFactor::MonthMatch => self.month_match,
            ScoreFactor::NewPlace => self.new_place,
            ScoreFactor::PersonalRating => self.personal_rating,
            ScoreFactor::ChildFriendly => self.child_friendly,
            ScoreFactor::CostMatch => self.cost_match,
            ScoreFactor::Safety => self.safety_score,
            ScoreFactor::DurationMatch => self.duration_match,
            ScoreFactor::FlightTime => self.flight_time,
            ScoreFactor::ClimateMatch => self.climate_match,
            ScoreFactor::TypeMatch => self.type_match,
        }
    }

    /// Per-factor contributions so displays can show how the total was earned.
    pub fn components(&self) -> Vec<ScoreComponent> {
        ScoreFactor::ALL
            .into_iter()
            .map(|factor| ScoreComponent {
                factor,
                label: factor.label(),
                points: self.points(factor),
                weight: factor.weight(),
            })
            .collect()
    }

    pub fn percentage(&self) -> f64 {
        self.total / max_possible_score() * 100.0
    }

    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.total, max_possible_score())
    }
}

/// Discrete contribution to a score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub label: &'static str,
    pub points: f64,
    pub weight: u16,
}

/// Letter grade derived from the share of the maximum score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreGrade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl ScoreGrade {
    pub fn from_score(score: f64, max: f64) -> Self {
        let percentage = score / max * 100.0;
        if percentage >= 90.0 {
            ScoreGrade::S
        } else if percentage >= 80.0 {
            ScoreGrade::A
        } else if percentage >= 70.0 {
            ScoreGrade::B
        } else if percentage >= 60.0 {
            ScoreGrade::C
        } else if percentage >= 50.0 {
            ScoreGrade::D
        } else {
            ScoreGrade::F
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreGrade::S => "S",
            ScoreGrade::A => "A",
            ScoreGrade::B => "B",
            ScoreGrade::C => "C",
            ScoreGrade::D => "D",
            ScoreGrade::F => "F",
        }
    }
}
