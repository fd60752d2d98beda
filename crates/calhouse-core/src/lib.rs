//! calhouse core - domain models, configuration and the dashboard controllers
//!
//! This crate holds everything the dashboard does that is independent of how
//! data is read from disk or how the page is served: the county and housing
//! tables, the request row handed to the model, the form controller and the
//! map renderer.

pub mod config;
pub mod error;
pub mod form;
pub mod map;
pub mod models;
pub mod ports;

pub use error::{CalhouseError, Result};
pub use form::{FormController, Prediction};
pub use map::{DeckSpec, MapRenderer};
pub use ports::Predictor;
