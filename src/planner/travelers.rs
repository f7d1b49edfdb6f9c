use super::domain::{DestinationId, Preferences, Traveler};

/// The travelers a query is scored for, resolved against the ledger.
///
/// Selected ids with no matching traveler are dropped, so a selection naming only unknown
/// travelers behaves exactly like an empty one.
#[derive(Debug, Clone)]
pub struct SelectedTravelers<'a> {
    travelers: Vec<&'a Traveler>,
}

impl<'a> SelectedTravelers<'a> {
    pub fn resolve(travelers: &'a [Traveler], preferences: &Preferences) -> Self {
        let travelers = travelers
            .iter()
            .filter(|traveler| preferences.selected_travelers.contains(&traveler.id))
            .collect();
        Self { travelers }
    }

    pub fn is_empty(&self) -> bool {
        self.travelers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.travelers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Traveler> + '_ {
        self.travelers.iter().copied()
    }

    pub fn has_children(&self) -> bool {
        self.travelers.iter().any(|traveler| traveler.is_child)
    }

    pub fn child_count(&self) -> usize {
        self.travelers
            .iter()
            .filter(|traveler| traveler.is_child)
            .count()
    }

    /// True when no selected traveler has visited `destination`. Vacuously true when empty.
    pub fn is_new_to_all(&self, destination: &DestinationId) -> bool {
        self.travelers
            .iter()
            .all(|traveler| !traveler.entry(destination).has_visited)
    }

    /// First selected traveler who has already been to `destination`.
    pub fn first_visitor(&self, destination: &DestinationId) -> Option<&'a Traveler> {
        self.travelers
            .iter()
            .copied()
            .find(|traveler| traveler.entry(destination).has_visited)
    }

    /// Mean interest rating, `None` when nobody is selected.
    pub fn average_rating(&self, destination: &DestinationId) -> Option<f64> {
        if self.travelers.is_empty() {
            return None;
        }

        let sum: f64 = self
            .travelers
            .iter()
            .map(|traveler| f64::from(traveler.entry(destination).rating))
            .sum();
        Some(sum / self.travelers.len() as f64)
    }
}
