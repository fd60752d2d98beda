//! calhouse model - fitted estimators behind the `Predictor` port
//!
//! A model is stored as a JSON artifact exported from the training
//! notebooks. This crate reads the artifact and evaluates it on the single
//! request row the form controller builds.

pub mod artifact;
pub mod constant;
pub mod linear;

pub use artifact::{load_model, EstimatorSpec, FittedModel, ModelArtifact, FORMAT_VERSION};
pub use constant::ConstantModel;
pub use linear::{CategoricalTerm, Coefficient, LinearPipeline, NumericTerm, TargetTransform};
