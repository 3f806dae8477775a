use crate::domain::Vehicle;
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::error;

const BUNDLED_CARS: &str = include_str!("../data/cars.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse vehicle dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate vehicle id: {0}")]
    DuplicateId(String),
}

/// The read-only vehicle list every page works from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    vehicles: Vec<Vehicle>,
}

impl Dataset {
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(DatasetError::DuplicateId(vehicle.id.clone()));
            }
        }

        Ok(Self { vehicles })
    }

    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let vehicles: Vec<Vehicle> = serde_json::from_str(raw)?;
        Self::new(vehicles)
    }

    /// The catalogue shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_CARS).unwrap_or_else(|e| {
            error!(error = %e, "bundled catalogue is invalid, starting empty");
            Self::default()
        })
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    /// Unique brands, sorted, for the brand select.
    pub fn brands(&self) -> Vec<&str> {
        self.vehicles
            .iter()
            .map(|vehicle| vehicle.brand.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Unique drive types in first-seen order.
    pub fn drives(&self) -> Vec<&str> {
        let mut drives: Vec<&str> = Vec::new();
        for vehicle in &self.vehicles {
            if !drives.contains(&vehicle.drive.as_str()) {
                drives.push(&vehicle.drive);
            }
        }
        drives
    }

    /// Highest rated first; ties keep dataset order.
    pub fn top_rated(&self, limit: usize) -> Vec<&Vehicle> {
        let mut ranked: Vec<&Vehicle> = self.vehicles.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(limit);
        ranked
    }

    /// Other vehicles sharing the category or the brand, in dataset order.
    pub fn similar_to(&self, vehicle: &Vehicle, limit: usize) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|other| {
                other.id != vehicle.id
                    && (other.category == vehicle.category || other.brand == vehicle.brand)
            })
            .take(limit)
            .collect()
    }
}
