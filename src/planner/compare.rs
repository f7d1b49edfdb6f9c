use serde::Serialize;

use super::domain::{Destination, DestinationId, Preferences, Traveler};
use super::scoring::{score_selected, ScoreBreakdown};
use super::travelers::SelectedTravelers;

/// Maximum number of destinations shown side by side.
pub const MAX_COMPARE: usize = 3;

/// One destination's column in a side-by-side comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonColumn<'a> {
    pub destination: &'a Destination,
    pub score: ScoreBreakdown,
    pub duration: u32,
    pub flight_hours: Option<f64>,
    pub cost: u8,
    pub safety: u8,
    pub kid_friendly: u8,
}

/// Best value across the compared columns for each metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComparisonHighlights {
    pub score: Option<f64>,
    pub flight_hours: Option<f64>,
    pub cost: Option<u8>,
    pub safety: Option<u8>,
    pub kid_friendly: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison<'a> {
    pub columns: Vec<ComparisonColumn<'a>>,
    pub best: ComparisonHighlights,
}

impl Comparison<'_> {
    pub fn is_best_score(&self, column: &ComparisonColumn<'_>) -> bool {
        self.best.score == Some(column.score.total)
    }
}

/// Compare the listed destinations in list order. Unknown ids are skipped and at most
/// [`MAX_COMPARE`] columns are produced.
pub fn compare<'a>(
    ids: &[DestinationId],
    catalog: &'a [Destination],
    preferences: &Preferences,
    travelers: &[Traveler],
) -> Comparison<'a> {
    let selected = SelectedTravelers::resolve(travelers, preferences);
    let columns: Vec<ComparisonColumn<'a>> = ids
        .iter()
        .filter_map(|id| catalog.iter().find(|destination| &destination.id == id))
        .take(MAX_COMPARE)
        .map(|destination| ComparisonColumn {
            destination,
            score: score_selected(destination, preferences, &selected),
            duration: destination.duration,
            flight_hours: destination.flight_hours(&preferences.home_airport),
            cost: destination.cost,
            safety: 10u8.saturating_sub(destination.danger),
            kid_friendly: destination.ease_with_child,
        })
        .collect();

    let best = ComparisonHighlights {
        score: columns
            .iter()
            .map(|column| column.score.total)
            .max_by(f64::total_cmp),
        flight_hours: columns
            .iter()
            .filter_map(|column| column.flight_hours)
            .min_by(f64::total_cmp),
        cost: columns.iter().map(|column| column.cost).min(),
        safety: columns.iter().map(|column| column.safety).max(),
        kid_friendly: columns.iter().map(|column| column.kid_friendly).max(),
    };

    Comparison { columns, best }
}
