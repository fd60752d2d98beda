use std::sync::Arc;

use calhouse_core::config::DataPaths;
use calhouse_core::error::Result;
use calhouse_core::{FormController, MapRenderer, Predictor};
use calhouse_model::load_model;
use calhouse_store::Datasets;

/// Everything a request reads; loaded once at startup and shared read-only
#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<Datasets>,
    pub model: Arc<dyn Predictor>,
}

impl AppState {
    pub fn new(datasets: Datasets, model: Arc<dyn Predictor>) -> Self {
        Self {
            datasets: Arc::new(datasets),
            model,
        }
    }

    /// Load the tables, page text and model from disk
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let datasets = Datasets::load(paths)?;
        let model = load_model(&paths.model)?;
        Ok(Self::new(datasets, Arc::new(model)))
    }

    pub fn form(&self) -> FormController<'_> {
        FormController::new(&self.datasets.counties, self.model.as_ref())
    }

    pub fn map(&self) -> MapRenderer<'_> {
        MapRenderer::new(&self.datasets.counties)
    }
}
