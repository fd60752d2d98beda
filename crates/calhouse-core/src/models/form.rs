use serde::{Deserialize, Serialize};

use crate::error::{CalhouseError, Result};

/// Median income is entered in thousands of US$ and divided by this before prediction
pub const INCOME_SCALE: f64 = 10.0;

/// Bounds and default for a numeric widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericBounds {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl NumericBounds {
    pub fn check(&self, field: &str, value: f64) -> Result<()> {
        if value.is_finite() && (self.min..=self.max).contains(&value) {
            Ok(())
        } else {
            Err(CalhouseError::InputOutOfRange {
                field: field.to_string(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const AGE_INPUT: NumericBounds = NumericBounds {
    label: "House age",
    min: 1.0,
    max: 50.0,
    step: 1.0,
    default: 10.0,
};

pub const INCOME_INPUT: NumericBounds = NumericBounds {
    label: "Median income (thousands US$)",
    min: 5.0,
    max: 100.0,
    step: 5.0,
    default: 45.0,
};

/// Widget values of one form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub county: String,
    #[serde(default = "default_age")]
    pub housing_median_age: u32,
    #[serde(default = "default_income")]
    pub median_income: f64,
}

fn default_age() -> u32 {
    AGE_INPUT.default as u32
}

fn default_income() -> f64 {
    INCOME_INPUT.default
}

impl FormInput {
    /// Form state with every widget at its default
    pub fn new(county: impl Into<String>) -> Self {
        Self {
            county: county.into(),
            housing_median_age: default_age(),
            median_income: default_income(),
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.housing_median_age = age;
        self
    }

    pub fn with_income(mut self, income: f64) -> Self {
        self.median_income = income;
        self
    }

    pub fn validate(&self) -> Result<()> {
        AGE_INPUT.check("housing_median_age", f64::from(self.housing_median_age))?;
        INCOME_INPUT.check("median_income", self.median_income)
    }

    /// Income as the model expects it
    pub fn scaled_income(&self) -> f64 {
        self.median_income / INCOME_SCALE
    }
}
