//! calhouse geo - geometry normalization
//!
//! County boundaries arrive as polygons and multi-polygons. Before the map can
//! draw them they are exploded into single parts, repaired when invalid, wound
//! counter-clockwise and flattened into plain coordinate arrays.

pub mod normalize;

pub use normalize::{normalize, normalize_part, NormalizeStats, RepairOutcome};
