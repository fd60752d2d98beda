//! Baseline regressor that ignores its input

use calhouse_core::error::Result;
use calhouse_core::models::FeatureRow;
use calhouse_core::ports::Predictor;

/// Predicts the same value for every row, like a mean/median dummy regressor
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantModel {
    name: String,
    value: f64,
}

impl ConstantModel {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Predictor for ConstantModel {
    fn predict(&self, _row: &FeatureRow) -> Result<f64> {
        Ok(self.value)
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
