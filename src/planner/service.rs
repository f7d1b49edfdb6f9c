use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::active_filters::{active_filters, ActiveFilter};
use super::advisor::{advise, DurationAdvice};
use super::compare::{compare, Comparison};
use super::domain::{Destination, DestinationId, Preferences, Traveler, TravelerData, TravelerId};
use super::filter::{exclusion_reason, Exclusion};
use super::pricing::{price_for, PriceSummary};
use super::ranking::rank;
use super::scoring::{score_selected, ScoreBreakdown, ScoreComponent, ScoreGrade};
use super::share::{encode, share_path, ShareParams};
use super::travelers::SelectedTravelers;
use crate::catalog::Catalog;
use crate::store::{PlannerState, StateStore, StoreError};

/// One ranked entry as returned to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub rank: usize,
    pub destination_id: DestinationId,
    pub name: String,
    pub score: ScoreBreakdown,
    pub percentage: f64,
    pub grade: ScoreGrade,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<DurationAdvice>,
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub preferences: Preferences,
    pub candidates: usize,
    pub results: Vec<Recommendation>,
    pub active_filters: Vec<ActiveFilter>,
    pub share_query: String,
}

/// Full view of a single destination under the current (or shared) preferences.
#[derive(Debug, Clone, Serialize)]
pub struct DestinationDetail {
    pub destination: Destination,
    pub score: ScoreBreakdown,
    pub percentage: f64,
    pub grade: ScoreGrade,
    pub components: Vec<ScoreComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<DurationAdvice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PriceSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_this_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_by: Option<Exclusion>,
    pub share_path: String,
}

/// Partial update to one traveler's ledger entry.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitUpdate {
    #[serde(default)]
    pub has_visited: Option<bool>,
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Service composing the catalog, the state store and the scoring pipeline.
pub struct PlannerService<S> {
    catalog: Arc<Catalog>,
    store: Arc<S>,
    writes: Mutex<()>,
}

impl<S> PlannerService<S>
where
    S: StateStore + 'static,
{
    pub fn new(catalog: Arc<Catalog>, store: Arc<S>) -> Self {
        Self {
            catalog,
            store,
            writes: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog for the saved preferences, or for `overrides` when supplied.
    pub fn recommend(
        &self,
        overrides: Option<Preferences>,
    ) -> Result<Recommendations, PlannerServiceError> {
        let state = self.store.load()?;
        let preferences = overrides.unwrap_or(state.preferences);

        let ranked = rank(&*self.catalog, &preferences, &state.travelers);
        debug!(
            candidates = self.catalog.len(),
            ranked = ranked.len(),
            month = %preferences.travel_month,
            "recommendations computed"
        );

        let results = ranked
            .iter()
            .enumerate()
            .map(|(index, entry)| Recommendation {
                rank: index + 1,
                destination_id: entry.destination.id.clone(),
                name: entry.destination.name.clone(),
                score: entry.score,
                percentage: entry.score.percentage(),
                grade: entry.score.grade(),
                advice: advise(entry.destination, &preferences.home_airport),
                favorite: preferences.favorites.contains(&entry.destination.id),
            })
            .collect();

        Ok(Recommendations {
            candidates: self.catalog.len(),
            results,
            active_filters: active_filters(&preferences),
            share_query: encode(&preferences),
            preferences,
        })
    }

    /// Score one destination. `shared` parameters from a share link take precedence over
    /// the saved month, airport and duration.
    pub fn destination_detail(
        &self,
        id: &DestinationId,
        shared: Option<&ShareParams>,
    ) -> Result<DestinationDetail, PlannerServiceError> {
        let destination = self
            .catalog
            .get(id)
            .ok_or_else(|| PlannerServiceError::UnknownDestination(id.clone()))?;

        let state = self.store.load()?;
        let mut preferences = state.preferences;
        if let Some(shared) = shared {
            shared.apply(&mut preferences);
        }

        let selected = SelectedTravelers::resolve(&state.travelers, &preferences);
        let score = score_selected(destination, &preferences, &selected);
        let airport = &preferences.home_airport;

        Ok(DestinationDetail {
            destination: destination.clone(),
            percentage: score.percentage(),
            grade: score.grade(),
            components: score.components(),
            score,
            advice: advise(destination, airport),
            pricing: PriceSummary::for_airport(destination, airport),
            price_this_month: price_for(destination, airport, preferences.travel_month),
            excluded_by: exclusion_reason(destination, &preferences, &selected),
            share_path: share_path(&destination.id, &preferences),
        })
    }

    /// Side-by-side view of `ids`, or of the saved compare list when `ids` is `None`.
    pub fn compare(
        &self,
        ids: Option<Vec<DestinationId>>,
    ) -> Result<Comparison<'_>, PlannerServiceError> {
        let state = self.store.load()?;
        let ids = ids.unwrap_or_else(|| state.preferences.compare_list.clone());
        Ok(compare(
            &ids,
            self.catalog.as_slice(),
            &state.preferences,
            &state.travelers,
        ))
    }

    pub fn preferences(&self) -> Result<Preferences, PlannerServiceError> {
        Ok(self.store.load()?.preferences)
    }

    pub fn travelers(&self) -> Result<Vec<Traveler>, PlannerServiceError> {
        Ok(self.store.load()?.travelers)
    }

    pub fn update_preferences(
        &self,
        preferences: Preferences,
    ) -> Result<Preferences, PlannerServiceError> {
        self.mutate(|state| {
            state.preferences = preferences;
            Ok(state.preferences.clone())
        })
    }

    pub fn add_traveler(
        &self,
        name: &str,
        is_child: bool,
    ) -> Result<Traveler, PlannerServiceError> {
        let catalog = Arc::clone(&self.catalog);
        let traveler = self.mutate(|state| {
            if name.trim().is_empty() {
                return Err(PlannerServiceError::InvalidTravelerName);
            }
            state
                .add_traveler(name, is_child, catalog.ids())
                .cloned()
                .ok_or_else(|| PlannerServiceError::TravelerExists(name.trim().to_string()))
        })?;

        info!(traveler = %traveler.id, is_child, "traveler added");
        Ok(traveler)
    }

    /// Update a traveler's visited flag and/or rating for a catalog destination.
    pub fn record_visit(
        &self,
        traveler: &TravelerId,
        destination: &DestinationId,
        update: VisitUpdate,
    ) -> Result<TravelerData, PlannerServiceError> {
        if !self.catalog.contains(destination) {
            return Err(PlannerServiceError::UnknownDestination(destination.clone()));
        }

        self.mutate(|state| {
            let unknown = || PlannerServiceError::UnknownTraveler(traveler.clone());
            let mut entry = state
                .traveler(traveler)
                .map(|known| known.entry(destination))
                .ok_or_else(unknown)?;

            if let Some(visited) = update.has_visited {
                entry = state
                    .set_visited(traveler, destination, visited)
                    .ok_or_else(unknown)?;
            }
            if let Some(rating) = update.rating {
                entry = state
                    .set_rating(traveler, destination, rating)
                    .ok_or_else(unknown)?;
            }
            Ok(entry)
        })
    }

    pub fn share_link(&self, id: &DestinationId) -> Result<String, PlannerServiceError> {
        if !self.catalog.contains(id) {
            return Err(PlannerServiceError::UnknownDestination(id.clone()));
        }
        let preferences = self.store.load()?.preferences;
        Ok(share_path(id, &preferences))
    }

    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut PlannerState) -> Result<T, PlannerServiceError>,
    ) -> Result<T, PlannerServiceError> {
        let _guard = self
            .writes
            .lock()
            .map_err(|_| StoreError::Unavailable("write lock poisoned".to_string()))?;
        let mut state = self.store.load()?;
        let outcome = apply(&mut state)?;
        self.store.save(&state)?;
        Ok(outcome)
    }
}

/// Error raised by the planner service.
#[derive(Debug, thiserror::Error)]
pub enum PlannerServiceError {
    #[error("unknown destination '{0}'")]
    UnknownDestination(DestinationId),
    #[error("unknown traveler '{0}'")]
    UnknownTraveler(TravelerId),
    #[error("traveler '{0}' already exists")]
    TravelerExists(String),
    #[error("traveler name must not be blank")]
    InvalidTravelerName,
    #[error(transparent)]
    Store(#[from] StoreError),
}
