//! Linear regression pipeline with a column transformer in front.
//!
//! Numeric features are standardized with the fitted mean and scale,
//! categorical features are one-hot encoded, and the response may have been
//! fitted on a transformed target which is inverted on output.

use std::collections::{BTreeMap, HashSet};

use calhouse_core::error::{CalhouseError, Result};
use calhouse_core::models::{FeatureRow, FeatureValue, FEATURE_COLUMNS};
use calhouse_core::ports::Predictor;
use serde::{Deserialize, Serialize};

/// Transform applied to the target before fitting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetTransform {
    #[default]
    Identity,
    Log,
    Log1p,
}

impl TargetTransform {
    /// Map a value in fitted space back to US$
    pub fn inverse(self, value: f64) -> f64 {
        match self {
            TargetTransform::Identity => value,
            TargetTransform::Log => value.exp(),
            TargetTransform::Log1p => value.exp_m1(),
        }
    }
}

/// Standardized numeric input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericTerm {
    pub feature: String,
    pub mean: f64,
    pub scale: f64,
    pub coefficient: f64,
}

/// One-hot encoded categorical input; levels not seen in training contribute 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalTerm {
    pub feature: String,
    pub levels: BTreeMap<String, f64>,
}

/// A named coefficient of the fitted model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coefficient {
    pub term: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearPipeline {
    name: String,
    numeric: Vec<NumericTerm>,
    categorical: Vec<CategoricalTerm>,
    intercept: f64,
    target: TargetTransform,
}

impl LinearPipeline {
    /// Build a pipeline, checking its terms against the request row layout
    pub fn new(
        name: impl Into<String>,
        numeric: Vec<NumericTerm>,
        categorical: Vec<CategoricalTerm>,
        intercept: f64,
        target: TargetTransform,
    ) -> Result<Self> {
        let pipeline = Self {
            name: name.into(),
            numeric,
            categorical,
            intercept,
            target,
        };
        pipeline.validate()?;
        Ok(pipeline)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        let features = self
            .numeric
            .iter()
            .map(|t| t.feature.as_str())
            .chain(self.categorical.iter().map(|t| t.feature.as_str()));

        for feature in features {
            if !FEATURE_COLUMNS.contains(&feature) {
                return Err(CalhouseError::SchemaMismatch {
                    reason: format!("model expects unknown feature '{}'", feature),
                });
            }
            if !seen.insert(feature) {
                return Err(CalhouseError::SchemaMismatch {
                    reason: format!("feature '{}' appears in more than one term", feature),
                });
            }
        }

        for term in &self.numeric {
            if !term.scale.is_finite() || term.scale == 0.0 {
                return Err(CalhouseError::SchemaMismatch {
                    reason: format!("feature '{}' has unusable scale {}", term.feature, term.scale),
                });
            }
        }

        Ok(())
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn target(&self) -> TargetTransform {
        self.target
    }

    /// Every coefficient, sorted ascending.
    ///
    /// One-hot levels are named `<feature>_<level>`.
    pub fn coefficients(&self) -> Vec<Coefficient> {
        let mut coefficients: Vec<Coefficient> = self
            .numeric
            .iter()
            .map(|t| Coefficient {
                term: t.feature.clone(),
                value: t.coefficient,
            })
            .chain(self.categorical.iter().flat_map(|t| {
                t.levels.iter().map(move |(level, value)| Coefficient {
                    term: format!("{}_{}", t.feature, level),
                    value: *value,
                })
            }))
            .collect();

        coefficients.sort_by(|a, b| a.value.total_cmp(&b.value));
        coefficients
    }

    /// Linear predictor in fitted (possibly transformed) target space
    fn decision(&self, row: &FeatureRow) -> Result<f64> {
        let mut total = self.intercept;

        for term in &self.numeric {
            match row.get(&term.feature) {
                Some(FeatureValue::Numeric(x)) => {
                    total += (x - term.mean) / term.scale * term.coefficient;
                }
                Some(FeatureValue::Categorical(_)) => {
                    return Err(CalhouseError::SchemaMismatch {
                        reason: format!("feature '{}' is categorical, model expects a number", term.feature),
                    });
                }
                None => return Err(missing_feature(&term.feature)),
            }
        }

        for term in &self.categorical {
            match row.get(&term.feature) {
                Some(FeatureValue::Categorical(level)) => {
                    total += term.levels.get(level).copied().unwrap_or(0.0);
                }
                Some(FeatureValue::Numeric(_)) => {
                    return Err(CalhouseError::SchemaMismatch {
                        reason: format!("feature '{}' is numeric, model expects a category", term.feature),
                    });
                }
                None => return Err(missing_feature(&term.feature)),
            }
        }

        Ok(total)
    }
}

fn missing_feature(feature: &str) -> CalhouseError {
    CalhouseError::SchemaMismatch {
        reason: format!("request row has no column '{}'", feature),
    }
}

impl Predictor for LinearPipeline {
    fn predict(&self, row: &FeatureRow) -> Result<f64> {
        let value = self.target.inverse(self.decision(row)?);
        if !value.is_finite() {
            tracing::warn!(model = %self.name, "Prediction is not a finite number");
        }
        Ok(value)
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
