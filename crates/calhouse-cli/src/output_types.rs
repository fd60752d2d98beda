//! JSON output shapes of the commands

use serde::Serialize;

use calhouse_core::config::ConfigSource;
use calhouse_model::Coefficient;

/// One county as listed by `calhouse counties`
#[derive(Debug, Serialize)]
pub struct CountyInfo {
    pub name: String,
    pub parts: usize,
    pub ocean_proximity: String,
    pub median_income_cat: String,
}

#[derive(Debug, Serialize)]
pub struct CountiesOutput {
    pub counties: Vec<CountyInfo>,
}

#[derive(Debug, Serialize)]
pub struct PredictOutput {
    pub county: String,
    pub housing_median_age: u32,
    pub median_income: f64,
    pub label: String,
    pub price: f64,
    pub display: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct MapWrittenOutput {
    pub county: String,
    pub path: String,
    pub polygons: usize,
}

#[derive(Debug, Serialize)]
pub struct InspectCountiesOutput {
    pub counties: usize,
    pub rows: usize,
    pub rings: usize,
    pub coordinates: usize,
}

#[derive(Debug, Serialize)]
pub struct InspectModelOutput {
    pub name: String,
    pub kind: String,
    pub coefficients: Vec<Coefficient>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: ConfigSource,
}

#[derive(Debug, Serialize)]
pub struct InspectConfigOutput {
    pub config: Vec<ConfigEntry>,
}
