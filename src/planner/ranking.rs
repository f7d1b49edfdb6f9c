use serde::Serialize;

use super::domain::{Destination, Preferences, Traveler};
use super::filter::filter_selected;
use super::scoring::{score_selected, ScoreBreakdown};
use super::travelers::SelectedTravelers;

/// A destination that survived filtering, with its score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDestination<'a> {
    pub destination: &'a Destination,
    pub score: ScoreBreakdown,
}

/// Filter, score, and order destinations by descending total.
///
/// The sort is stable: destinations with equal totals keep their input order.
pub fn rank<'a, I>(
    destinations: I,
    preferences: &Preferences,
    travelers: &[Traveler],
) -> Vec<RankedDestination<'a>>
where
    I: IntoIterator<Item = &'a Destination>,
{
    let selected = SelectedTravelers::resolve(travelers, preferences);
    let mut ranked: Vec<RankedDestination<'a>> =
        filter_selected(destinations, preferences, &selected)
            .into_iter()
            .map(|destination| RankedDestination {
                destination,
                score: score_selected(destination, preferences, &selected),
            })
            .collect();

    ranked.sort_by(|left, right| right.score.total.total_cmp(&left.score.total));
    ranked
}
