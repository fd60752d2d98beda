//! Error types for calhouse

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalhouseError {
    // Dataset errors
    #[error("Dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Failed to read dataset {path}: {reason}")]
    DatasetRead { path: PathBuf, reason: String },

    #[error("Column '{column}' missing from {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("Null value in column '{column}' at row {row}")]
    MissingValue { column: String, row: usize },

    // Geometry errors
    #[error("Not a GeoParquet file (missing 'geo' metadata): {path}")]
    NotGeoParquet { path: PathBuf },

    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    #[error("Unsupported geometry type {kind}, expected Polygon or MultiPolygon")]
    UnsupportedGeometry { kind: String },

    // Model errors
    #[error("Failed to load model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("Request row does not match the model schema: {reason}")]
    SchemaMismatch { reason: String },

    // Form errors
    #[error("County not found: {name}")]
    CountyNotFound { name: String },

    #[error("{field} must be between {min} and {max}, got {value}")]
    InputOutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CalhouseError {
    fn from(err: serde_json::Error) -> Self {
        CalhouseError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CalhouseError>;
