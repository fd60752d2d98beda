use serde::{Deserialize, Serialize};

use super::geometry::FlatGeometry;
use crate::error::{CalhouseError, Result};

/// One county part with its precomputed form defaults.
///
/// After loading, a county whose boundary was a multi-polygon appears once
/// per part, every part carrying the same attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountyRecord {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
    pub total_rooms: f64,
    pub population: f64,
    pub rooms_per_household: f64,
    pub bedrooms_per_room: f64,
    pub population_per_household: f64,
    pub ocean_proximity: String,
    pub median_income_cat: String,
    pub geometry: FlatGeometry,
}

/// The county boundary table, in file order
#[derive(Debug, Clone, Default)]
pub struct CountyTable {
    records: Vec<CountyRecord>,
}

impl CountyTable {
    pub fn new(records: Vec<CountyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CountyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, de-duplicated county names for the selector
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Every row whose name equals `name`
    pub fn rows_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CountyRecord> + 'a {
        self.records.iter().filter(move |r| r.name == name)
    }

    /// The first row for `name`; its attributes stand for the whole county
    pub fn first_for(&self, name: &str) -> Result<&CountyRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CalhouseError::CountyNotFound { name: name.to_string() })
    }
}
