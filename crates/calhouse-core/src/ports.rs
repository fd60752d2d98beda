//! Port definitions

use crate::error::Result;
use crate::models::FeatureRow;

/// Port for a fitted regression estimator
pub trait Predictor: Send + Sync {
    /// Predict the median house value for one request row
    ///
    /// # Arguments
    /// * `row` - The request row assembled from form state
    ///
    /// # Returns
    /// Predicted value in US$
    fn predict(&self, row: &FeatureRow) -> Result<f64>;

    /// Get the name/identifier of the fitted model
    fn model_name(&self) -> &str;
}
