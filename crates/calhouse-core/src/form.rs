//! Form controller: turns widget values into a request row and a prediction.
//!
//! The controller holds no state of its own. Every call re-reads the selected
//! county's precomputed attributes from the county table, merges them with the
//! live widget values and, on submit, hands the row to the model.

use serde::Serialize;

use crate::error::Result;
use crate::models::{CountyRecord, CountyTable, FeatureRow, FormInput};
use crate::ports::Predictor;

/// Label shown above the predicted price
pub const PREDICTION_LABEL: &str = "Predict price: (US$)";

/// Result of one form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub county: String,
    pub label: &'static str,
    pub price: f64,
    /// Price with two decimal places, as displayed in the metric
    pub display: String,
}

pub struct FormController<'a> {
    counties: &'a CountyTable,
    predictor: &'a dyn Predictor,
}

impl<'a> FormController<'a> {
    pub fn new(counties: &'a CountyTable, predictor: &'a dyn Predictor) -> Self {
        Self { counties, predictor }
    }

    /// County selector options, sorted
    pub fn options(&self) -> Vec<&'a str> {
        self.counties.names()
    }

    /// Precomputed attributes backing the form for `county`
    pub fn defaults_for(&self, county: &str) -> Result<&'a CountyRecord> {
        self.counties.first_for(county)
    }

    /// Assemble the request row for the current form state
    pub fn build_row(&self, input: &FormInput) -> Result<FeatureRow> {
        input.validate()?;
        let county = self.defaults_for(&input.county)?;

        let parts = self.counties.rows_for(&input.county).count();
        if parts > 1 {
            tracing::debug!(county = %county.name, parts, "County has several parts, using the first");
        }

        Ok(FeatureRow {
            longitude: county.longitude,
            latitude: county.latitude,
            housing_median_age: f64::from(input.housing_median_age),
            total_rooms: county.total_rooms,
            population: county.population,
            median_income: input.scaled_income(),
            rooms_per_household: county.rooms_per_household,
            population_per_household: county.population_per_household,
            ocean_proximity: county.ocean_proximity.clone(),
            median_income_cat: county.median_income_cat.clone(),
            bedrooms_per_room: county.bedrooms_per_room,
        })
    }

    /// Build the row and run the model on it
    pub fn submit(&self, input: &FormInput) -> Result<Prediction> {
        let row = self.build_row(input)?;
        let price = self.predictor.predict(&row)?;

        tracing::info!(
            county = %input.county,
            housing_median_age = input.housing_median_age,
            median_income = input.median_income,
            price,
            model = self.predictor.model_name(),
            "Prediction"
        );

        Ok(Prediction {
            county: input.county.clone(),
            label: PREDICTION_LABEL,
            price,
            display: format_price(price),
        })
    }
}

/// Format a price the way the metric displays it
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
