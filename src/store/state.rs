use serde::{Deserialize, Serialize};

use crate::planner::compare::MAX_COMPARE;
use crate::planner::domain::{
    DestinationId, Preferences, Traveler, TravelerData, TravelerId, MAX_RATING,
};

/// Persisted application state: the traveler ledger plus the current preferences.
///
/// All mutation happens here; the scoring core only ever reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerState {
    pub travelers: Vec<Traveler>,
    pub preferences: Preferences,
}

/// Traveler id derived from a display name: lowercased, whitespace runs become `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl PlannerState {
    pub fn traveler(&self, id: &TravelerId) -> Option<&Traveler> {
        self.travelers.iter().find(|traveler| &traveler.id == id)
    }

    fn traveler_mut(&mut self, id: &TravelerId) -> Option<&mut Traveler> {
        self.travelers.iter_mut().find(|traveler| &traveler.id == id)
    }

    /// Add a traveler whose ledger is seeded with the neutral entry for every catalog id.
    ///
    /// Returns `None` when the name is blank or its slug is already taken.
    pub fn add_traveler<'a, I>(
        &mut self,
        name: &str,
        is_child: bool,
        catalog_ids: I,
    ) -> Option<&Traveler>
    where
        I: IntoIterator<Item = &'a DestinationId>,
    {
        let slug = slugify(name);
        if slug.is_empty() {
            return None;
        }

        let id = TravelerId::new(slug);
        if self.traveler(&id).is_some() {
            return None;
        }

        let mut traveler = Traveler::new(id, name.trim(), is_child);
        traveler.destinations = catalog_ids
            .into_iter()
            .map(|destination| (destination.clone(), TravelerData::default()))
            .collect();

        self.travelers.push(traveler);
        self.travelers.last()
    }

    /// Remove a traveler and drop them from the selection. Returns whether anything was removed.
    pub fn remove_traveler(&mut self, id: &TravelerId) -> bool {
        let before = self.travelers.len();
        self.travelers.retain(|traveler| &traveler.id != id);
        self.preferences.selected_travelers.remove(id);
        self.travelers.len() != before
    }

    pub fn set_traveler_child(&mut self, id: &TravelerId, is_child: bool) -> bool {
        match self.traveler_mut(id) {
            Some(traveler) => {
                traveler.is_child = is_child;
                true
            }
            None => false,
        }
    }

    pub fn set_visited(
        &mut self,
        traveler: &TravelerId,
        destination: &DestinationId,
        visited: bool,
    ) -> Option<TravelerData> {
        self.update_entry(traveler, destination, |entry| entry.has_visited = visited)
    }

    /// Record an interest rating, clamped to the 0-10 scale.
    pub fn set_rating(
        &mut self,
        traveler: &TravelerId,
        destination: &DestinationId,
        rating: u8,
    ) -> Option<TravelerData> {
        let rating = rating.min(MAX_RATING);
        self.update_entry(traveler, destination, |entry| entry.rating = rating)
    }

    fn update_entry(
        &mut self,
        traveler: &TravelerId,
        destination: &DestinationId,
        update: impl FnOnce(&mut TravelerData),
    ) -> Option<TravelerData> {
        let traveler = self.traveler_mut(traveler)?;
        let entry = traveler
            .destinations
            .entry(destination.clone())
            .or_default();
        update(entry);
        Some(*entry)
    }

    /// Flip a traveler in or out of the selection. Returns whether they are now selected.
    pub fn toggle_traveler(&mut self, id: &TravelerId) -> bool {
        let selected = &mut self.preferences.selected_travelers;
        if selected.remove(id) {
            false
        } else {
            selected.insert(id.clone());
            true
        }
    }

    pub fn toggle_favorite(&mut self, destination: &DestinationId) -> bool {
        let favorites = &mut self.preferences.favorites;
        if let Some(position) = favorites.iter().position(|id| id == destination) {
            favorites.remove(position);
            false
        } else {
            favorites.push(destination.clone());
            true
        }
    }

    /// Add or remove a destination from the compare list. Additions beyond
    /// [`MAX_COMPARE`] are ignored. Returns whether the destination is now listed.
    pub fn toggle_compare(&mut self, destination: &DestinationId) -> bool {
        let compare_list = &mut self.preferences.compare_list;
        if let Some(position) = compare_list.iter().position(|id| id == destination) {
            compare_list.remove(position);
            return false;
        }

        if compare_list.len() >= MAX_COMPARE {
            return false;
        }

        compare_list.push(destination.clone());
        true
    }

    pub fn clear_compare(&mut self) {
        self.preferences.compare_list.clear();
    }

    pub fn reset_preferences(&mut self) {
        self.preferences = Preferences::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_ids() -> Vec<DestinationId> {
        vec![DestinationId::new("kyoto"), DestinationId::new("lisbon")]
    }

    #[test]
    fn slugify_collapses_whitespace() {
        assert_eq!(slugify("Mary  Jane Watson"), "mary-jane-watson");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn add_traveler_seeds_ledger_and_ignores_duplicates() {
        let mut state = PlannerState::default();
        let ids = catalog_ids();

        let added = state
            .add_traveler("Ada Lovelace", false, &ids)
            .expect("traveler added")
            .clone();
        assert_eq!(added.id.as_str(), "ada-lovelace");
        assert_eq!(added.destinations.len(), 2);
        assert_eq!(
            added.entry(&DestinationId::new("kyoto")),
            TravelerData::default()
        );

        assert!(state.add_traveler("ada lovelace", true, &ids).is_none());
        assert_eq!(state.travelers.len(), 1);
    }

    #[test]
    fn remove_traveler_deselects() {
        let mut state = PlannerState::default();
        state.add_traveler("Sam", false, &catalog_ids());
        let sam = TravelerId::new("sam");
        assert!(state.toggle_traveler(&sam));

        assert!(state.remove_traveler(&sam));
        assert!(state.preferences.selected_travelers.is_empty());
        assert!(!state.remove_traveler(&sam));
    }

    #[test]
    fn rating_is_clamped() {
        let mut state = PlannerState::default();
        state.add_traveler("Sam", false, &catalog_ids());

        let entry = state
            .set_rating(&"sam".into(), &"kyoto".into(), 42)
            .expect("known traveler");
        assert_eq!(entry.rating, MAX_RATING);

        assert!(state
            .set_visited(&"nobody".into(), &"kyoto".into(), true)
            .is_none());
    }

    #[test]
    fn compare_list_caps_at_three() {
        let mut state = PlannerState::default();
        for id in ["a", "b", "c"] {
            assert!(state.toggle_compare(&id.into()));
        }
        assert!(!state.toggle_compare(&"d".into()));
        assert_eq!(state.preferences.compare_list.len(), MAX_COMPARE);

        assert!(!state.toggle_compare(&"b".into()));
        assert_eq!(
            state.preferences.compare_list,
            vec![DestinationId::new("a"), DestinationId::new("c")]
        );

        state.clear_compare();
        assert!(state.preferences.compare_list.is_empty());
    }

    #[test]
    fn favorites_toggle_in_and_out() {
        let mut state = PlannerState::default();
        assert!(state.toggle_favorite(&"kyoto".into()));
        assert!(!state.toggle_favorite(&"kyoto".into()));
        assert!(state.preferences.favorites.is_empty());
    }
}
