//! The single-row request handed to the model on every submission.

use serde::{Deserialize, Serialize};

/// Model input columns, in the order the estimator was fitted with
pub const FEATURE_COLUMNS: [&str; 11] = [
    "longitude",
    "latitude",
    "housing_median_age",
    "total_rooms",
    "population",
    "median_income",
    "rooms_per_household",
    "population_per_household",
    "ocean_proximity",
    "median_income_cat",
    "bedrooms_per_room",
];

/// A single cell of the request row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Numeric(f64),
    Categorical(&'a str),
}

/// One prediction request; built per submission and dropped afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub longitude: f64,
    pub latitude: f64,
    pub housing_median_age: f64,
    pub total_rooms: f64,
    pub population: f64,
    /// Income already divided by the form's scale factor
    pub median_income: f64,
    pub rooms_per_household: f64,
    pub population_per_household: f64,
    pub ocean_proximity: String,
    pub median_income_cat: String,
    pub bedrooms_per_room: f64,
}

impl FeatureRow {
    /// Look a column up by name
    pub fn get(&self, column: &str) -> Option<FeatureValue<'_>> {
        let value = match column {
            "longitude" => FeatureValue::Numeric(self.longitude),
            "latitude" => FeatureValue::Numeric(self.latitude),
            "housing_median_age" => FeatureValue::Numeric(self.housing_median_age),
            "total_rooms" => FeatureValue::Numeric(self.total_rooms),
            "population" => FeatureValue::Numeric(self.population),
            "median_income" => FeatureValue::Numeric(self.median_income),
            "rooms_per_household" => FeatureValue::Numeric(self.rooms_per_household),
            "population_per_household" => FeatureValue::Numeric(self.population_per_household),
            "ocean_proximity" => FeatureValue::Categorical(&self.ocean_proximity),
            "median_income_cat" => FeatureValue::Categorical(&self.median_income_cat),
            "bedrooms_per_room" => FeatureValue::Numeric(self.bedrooms_per_room),
            _ => return None,
        };
        Some(value)
    }

    /// All columns paired with their values, in fitted order
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, FeatureValue<'_>)> {
        FEATURE_COLUMNS.iter().filter_map(move |c| self.get(c).map(|v| (*c, v)))
    }
}
