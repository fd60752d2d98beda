//! Flattened geometry as handed to the map widget.
//!
//! The widget has no notion of geometry objects; it consumes nested
//! coordinate arrays. A polygon is stored as a one-element list holding its
//! exterior ring, a multi-polygon as one exterior ring per part.

use serde::{Deserialize, Serialize};

/// A closed ring of `[x, y]` pairs (first point repeated at the end)
pub type Ring = Vec<[f64; 2]>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatGeometry(pub Vec<Ring>);

impl FlatGeometry {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self(rings)
    }

    pub fn rings(&self) -> &[Ring] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|ring| ring.is_empty())
    }

    /// First coordinate of the first non-empty ring
    pub fn first_coord(&self) -> Option<[f64; 2]> {
        self.0.iter().find_map(|ring| ring.first().copied())
    }

    /// Total number of coordinates across all rings
    pub fn coord_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }
}
