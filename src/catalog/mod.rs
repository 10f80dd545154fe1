// SPDX-License-Identifier: MPL-2.0
//! Used-car catalog read from a static JSON data file.
//!
//! The file has the shape `{ "data": { "used_cars": [...],
//! "featured_used_cars": [...] } }`. Either list may be missing. The catalog
//! is read once and never written back.

pub mod car;
pub mod format;

pub use car::Car;

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct CarsData {
    #[serde(default)]
    data: CarLists,
}

#[derive(Debug, Default, Deserialize)]
struct CarLists {
    #[serde(default)]
    used_cars: Vec<Car>,
    #[serde(default)]
    featured_used_cars: Vec<Car>,
}

/// All listings known to the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    used_cars: Vec<Car>,
    featured_cars: Vec<Car>,
}

impl Catalog {
    pub fn new(used_cars: Vec<Car>, featured_cars: Vec<Car>) -> Self {
        Self {
            used_cars,
            featured_cars,
        }
    }

    /// Parses a catalog from the data file contents.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: CarsData = serde_json::from_str(json)?;
        Ok(Self::new(raw.data.used_cars, raw.data.featured_used_cars))
    }

    /// Reads and parses the data file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            used = catalog.used_cars.len(),
            featured = catalog.featured_cars.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The first `limit` featured cars.
    pub fn featured(&self, limit: usize) -> &[Car] {
        &self.featured_cars[..limit.min(self.featured_cars.len())]
    }

    /// The first `limit` regular listings.
    pub fn listings(&self, limit: usize) -> &[Car] {
        &self.used_cars[..limit.min(self.used_cars.len())]
    }

    pub fn featured_count(&self) -> usize {
        self.featured_cars.len()
    }

    pub fn listing_count(&self) -> usize {
        self.used_cars.len()
    }

    /// Looks a car up by id, regular listings first.
    pub fn find(&self, id: &str) -> Option<&Car> {
        self.used_cars
            .iter()
            .chain(self.featured_cars.iter())
            .find(|car| car.id == id)
    }

    /// Total records across both lists, counting duplicates.
    pub fn len(&self) -> usize {
        self.used_cars.len() + self.featured_cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used_cars.is_empty() && self.featured_cars.is_empty()
    }
}
