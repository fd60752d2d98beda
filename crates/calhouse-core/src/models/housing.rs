use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One block group of the housing feature table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub housing_median_age: f64,
    pub total_rooms: f64,
    pub total_bedrooms: Option<f64>,
    pub population: f64,
    pub households: f64,
    pub median_income: f64,
    pub median_house_value: Option<f64>,
    pub ocean_proximity: String,
    pub median_income_cat: Option<String>,
}

/// The housing feature table, kept for reference alongside the county table
#[derive(Debug, Clone, Default)]
pub struct HousingTable {
    records: Vec<HousingRecord>,
}

/// Aggregate view of the housing table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingSummary {
    pub rows: usize,
    pub by_ocean_proximity: BTreeMap<String, usize>,
    pub mean_median_house_value: Option<f64>,
    pub mean_median_income: Option<f64>,
}

impl HousingTable {
    pub fn new(records: Vec<HousingRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HousingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> HousingSummary {
        let mut by_ocean_proximity = BTreeMap::new();
        for record in &self.records {
            *by_ocean_proximity.entry(record.ocean_proximity.clone()).or_insert(0) += 1;
        }

        HousingSummary {
            rows: self.records.len(),
            by_ocean_proximity,
            mean_median_house_value: mean(self.records.iter().filter_map(|r| r.median_house_value)),
            mean_median_income: mean(self.records.iter().map(|r| r.median_income)),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
