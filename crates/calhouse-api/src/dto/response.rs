use calhouse_core::models::{CountyRecord, NumericBounds};
use calhouse_core::Prediction;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub counties: usize,
    pub model: String,
    pub loaded_at: DateTime<Utc>,
}

/// Page title and the intro text shown under it
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub title: &'static str,
    pub intro: String,
    pub sections: Vec<String>,
}

/// Bounds, step and default of a numeric widget
#[derive(Debug, Serialize)]
pub struct WidgetBounds {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl From<NumericBounds> for WidgetBounds {
    fn from(bounds: NumericBounds) -> Self {
        Self {
            label: bounds.label,
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
            default: bounds.default,
        }
    }
}

/// Everything the page needs to draw the form
#[derive(Debug, Serialize)]
pub struct FormResponse {
    pub counties: Vec<String>,
    pub housing_median_age: WidgetBounds,
    pub median_income: WidgetBounds,
    pub prediction_label: &'static str,
}

/// Precomputed attributes the form uses for a county
#[derive(Debug, Serialize)]
pub struct CountyDefaultsResponse {
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
    pub parts: usize,
}

impl CountyDefaultsResponse {
    pub fn new(record: &CountyRecord, parts: usize) -> Self {
        Self {
            name: record.name.clone(),
            longitude: record.longitude,
            latitude: record.latitude,
            total_rooms: record.total_rooms,
            population: record.population,
            rooms_per_household: record.rooms_per_household,
            bedrooms_per_room: record.bedrooms_per_room,
            population_per_household: record.population_per_household,
            ocean_proximity: record.ocean_proximity.clone(),
            median_income_cat: record.median_income_cat.clone(),
            parts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub county: String,
    pub label: &'static str,
    pub price: f64,
    pub display: String,
    pub model: String,
}

impl PredictResponse {
    pub fn new(prediction: Prediction, model: &str) -> Self {
        Self {
            county: prediction.county,
            label: prediction.label,
            price: prediction.price,
            display: prediction.display,
            model: model.to_string(),
        }
    }
}
