//! Model artifact files.
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "name": "ridge",
//!   "estimator": {
//!     "kind": "linear_pipeline",
//!     "numeric": [{"feature": "median_income", "mean": 3.87, "scale": 1.9, "coefficient": 71000.0}],
//!     "categorical": [{"feature": "ocean_proximity", "levels": {"INLAND": -36000.0}}],
//!     "intercept": 207000.0,
//!     "target": "identity"
//!   }
//! }
//! ```

use std::fs;
use std::path::Path;

use calhouse_core::error::{CalhouseError, Result};
use calhouse_core::models::FeatureRow;
use calhouse_core::ports::Predictor;
use serde::{Deserialize, Serialize};

use crate::constant::ConstantModel;
use crate::linear::{CategoricalTerm, Coefficient, LinearPipeline, NumericTerm, TargetTransform};

/// Artifact layout version this crate reads
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub name: String,
    pub estimator: EstimatorSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EstimatorSpec {
    Constant {
        value: f64,
    },
    LinearPipeline {
        #[serde(default)]
        numeric: Vec<NumericTerm>,
        #[serde(default)]
        categorical: Vec<CategoricalTerm>,
        intercept: f64,
        #[serde(default)]
        target: TargetTransform,
    },
}

impl ModelArtifact {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the estimator the artifact describes
    pub fn into_model(self) -> Result<FittedModel> {
        if self.format_version != FORMAT_VERSION {
            return Err(CalhouseError::SchemaMismatch {
                reason: format!(
                    "artifact format version {} is not supported (expected {})",
                    self.format_version, FORMAT_VERSION
                ),
            });
        }

        let model = match self.estimator {
            EstimatorSpec::Constant { value } => FittedModel::Constant(ConstantModel::new(self.name, value)),
            EstimatorSpec::LinearPipeline {
                numeric,
                categorical,
                intercept,
                target,
            } => FittedModel::Linear(LinearPipeline::new(self.name, numeric, categorical, intercept, target)?),
        };
        Ok(model)
    }
}

/// Any estimator an artifact can hold
#[derive(Debug, Clone, PartialEq)]
pub enum FittedModel {
    Constant(ConstantModel),
    Linear(LinearPipeline),
}

impl FittedModel {
    pub fn kind(&self) -> &'static str {
        match self {
            FittedModel::Constant(_) => "constant",
            FittedModel::Linear(_) => "linear_pipeline",
        }
    }

    /// Coefficients sorted ascending; a constant model has none
    pub fn coefficients(&self) -> Vec<Coefficient> {
        match self {
            FittedModel::Constant(_) => Vec::new(),
            FittedModel::Linear(model) => model.coefficients(),
        }
    }
}

impl Predictor for FittedModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64> {
        match self {
            FittedModel::Constant(model) => model.predict(row),
            FittedModel::Linear(model) => model.predict(row),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            FittedModel::Constant(model) => model.model_name(),
            FittedModel::Linear(model) => model.model_name(),
        }
    }
}

/// Read and build the model artifact at `path`
pub fn load_model(path: &Path) -> Result<FittedModel> {
    let load_error = |reason: String| CalhouseError::ModelLoad {
        path: path.to_path_buf(),
        reason,
    };

    let json = fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    let artifact = ModelArtifact::from_json(&json).map_err(|e| load_error(e.to_string()))?;
    let model = artifact.into_model().map_err(|e| load_error(e.to_string()))?;

    tracing::info!(path = %path.display(), model = model.model_name(), kind = model.kind(), "Loaded model");
    Ok(model)
}
