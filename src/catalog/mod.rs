//! Static destination catalog loaded from the JSON document shipped with the planner.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::planner::domain::{Destination, DestinationId, Month};

/// Ratings in the catalog live on a 0-10 scale.
const RATING_CEILING: u8 = 10;

/// Error raised while loading or validating the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read destination catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid destination catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate destination id '{0}'")]
    DuplicateId(DestinationId),
    #[error("destination '{id}' is invalid: {reason}")]
    Invalid { id: DestinationId, reason: String },
}

/// Ordered, validated list of destinations. Catalog order is the tie-break order for ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(
            destinations = catalog.len(),
            source = %path.display(),
            "destination catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let destinations: Vec<Destination> = serde_json::from_reader(reader)?;
        Self::from_destinations(destinations)
    }

    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for destination in &destinations {
            if !seen.insert(destination.id.clone()) {
                return Err(CatalogError::DuplicateId(destination.id.clone()));
            }
            validate(destination)?;
        }

        Ok(Self { destinations })
    }

    pub fn get(&self, id: &DestinationId) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|destination| &destination.id == id)
    }

    pub fn contains(&self, id: &DestinationId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &DestinationId> + '_ {
        self.destinations.iter().map(|destination| &destination.id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(destination: &Destination) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::Invalid {
        id: destination.id.clone(),
        reason,
    };

    if destination.duration == 0 {
        return Err(invalid("duration must be at least one day".to_string()));
    }

    for (field, value) in [
        ("easeWithChild", destination.ease_with_child),
        ("urgency", destination.urgency),
        ("danger", destination.danger),
        ("cost", destination.cost),
    ] {
        if value > RATING_CEILING {
            return Err(invalid(format!(
                "{field} {value} outside 0-{RATING_CEILING}"
            )));
        }
    }

    if let Some((month, value)) = destination
        .best_months
        .iter()
        .find(|(_, value)| *value > 1)
    {
        return Err(invalid(format!(
            "bestMonths.{month} must be 0 or 1, got {value}"
        )));
    }

    for (airport, hours) in &destination.flight_times {
        if !is_non_negative(*hours) {
            return Err(invalid(format!("flight time from {airport} is {hours}")));
        }
    }

    if let Some(prices) = &destination.avg_flight_prices {
        for (airport, table) in prices {
            if let Some(month) = Month::ALL
                .into_iter()
                .find(|month| !is_non_negative(table.get(*month)))
            {
                return Err(invalid(format!(
                    "price from {airport} in {month} is {}",
                    table.get(month)
                )));
            }
        }
    }

    Ok(())
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
