//! Geometry normalization for the map widget.
//!
//! Each county geometry goes through four steps:
//! 1. explode: a multi-polygon becomes one polygon per part
//! 2. repair: an invalid part is rebuilt by a unary union, which resolves
//!    self-intersections the same way a zero-width buffer does
//! 3. orient: exterior rings counter-clockwise, holes clockwise
//! 4. flatten: exterior rings only, as nested `[x, y]` arrays
//!
//! Repair is best effort. A part the union cannot rebuild is passed through
//! unchanged, and so is a part with a non-finite coordinate, which is neither
//! unioned nor reoriented.

use calhouse_core::error::{CalhouseError, Result};
use calhouse_core::models::{FlatGeometry, Ring};
use geo::algorithm::orient::{Direction, Orient};
use geo::{unary_union, CoordsIter, Geometry, LineString, MultiPolygon, Polygon, Validation};

/// What the repair step did to one part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// Already valid, left alone
    Valid,
    /// Invalid and rebuilt
    Repaired,
    /// Invalid and left as is
    Unrepairable,
}

/// Counters gathered while normalizing a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub geometries: usize,
    pub parts: usize,
    pub repaired: usize,
    pub unrepairable: usize,
}

impl NormalizeStats {
    fn record(&mut self, outcome: RepairOutcome) {
        self.parts += 1;
        match outcome {
            RepairOutcome::Valid => {}
            RepairOutcome::Repaired => self.repaired += 1,
            RepairOutcome::Unrepairable => self.unrepairable += 1,
        }
    }
}

/// Split a multi-polygon into its parts; a polygon stays a single part
pub fn explode(geometry: Geometry<f64>) -> Result<Vec<Polygon<f64>>> {
    match geometry {
        Geometry::Polygon(polygon) => Ok(vec![polygon]),
        Geometry::MultiPolygon(multi) => Ok(multi.0),
        other => Err(CalhouseError::UnsupportedGeometry { kind: geometry_kind(&other).to_string() }),
    }
}

/// Rebuild an invalid polygon; valid input is returned untouched
pub fn repair(polygon: Polygon<f64>) -> (Geometry<f64>, RepairOutcome) {
    if !is_finite(&polygon) {
        return (Geometry::Polygon(polygon), RepairOutcome::Unrepairable);
    }
    if polygon.is_valid() {
        return (Geometry::Polygon(polygon), RepairOutcome::Valid);
    }

    let rebuilt: MultiPolygon<f64> = unary_union(std::iter::once(&polygon));
    if rebuilt.0.is_empty() {
        return (Geometry::Polygon(polygon), RepairOutcome::Unrepairable);
    }

    let mut parts = rebuilt.0;
    let geometry = if parts.len() == 1 {
        Geometry::Polygon(parts.remove(0))
    } else {
        Geometry::MultiPolygon(MultiPolygon::new(parts))
    };
    (geometry, RepairOutcome::Repaired)
}

/// Wind exterior rings counter-clockwise
pub fn orient_ccw(geometry: Geometry<f64>) -> Geometry<f64> {
    match geometry {
        Geometry::Polygon(p) => Geometry::Polygon(orient_part(p)),
        Geometry::MultiPolygon(mp) => {
            Geometry::MultiPolygon(MultiPolygon::new(mp.0.into_iter().map(orient_part).collect()))
        }
        other => other,
    }
}

// winding order is undefined once a coordinate is NaN or infinite
fn orient_part(polygon: Polygon<f64>) -> Polygon<f64> {
    if is_finite(&polygon) {
        polygon.orient(Direction::Default)
    } else {
        polygon
    }
}

fn is_finite(polygon: &Polygon<f64>) -> bool {
    polygon.coords_iter().all(|c| c.x.is_finite() && c.y.is_finite())
}

/// Exterior rings as coordinate arrays: `Polygon → [ring]`, `MultiPolygon → [ring, ...]`
pub fn flatten(geometry: &Geometry<f64>) -> Result<FlatGeometry> {
    match geometry {
        Geometry::Polygon(p) => Ok(FlatGeometry::new(vec![ring_coords(p.exterior())])),
        Geometry::MultiPolygon(mp) => {
            Ok(FlatGeometry::new(mp.iter().map(|p| ring_coords(p.exterior())).collect()))
        }
        other => Err(CalhouseError::UnsupportedGeometry { kind: geometry_kind(other).to_string() }),
    }
}

fn ring_coords(ring: &LineString<f64>) -> Ring {
    ring.coords().map(|c| [c.x, c.y]).collect()
}

/// Repair, orient and flatten one exploded part
pub fn normalize_part(polygon: Polygon<f64>) -> Result<(FlatGeometry, RepairOutcome)> {
    let (repaired, outcome) = repair(polygon);
    let oriented = orient_ccw(repaired);
    Ok((flatten(&oriented)?, outcome))
}

/// Explode `geometry` and normalize every part
pub fn normalize(geometry: Geometry<f64>, stats: &mut NormalizeStats) -> Result<Vec<FlatGeometry>> {
    stats.geometries += 1;

    let mut flat = Vec::new();
    for part in explode(geometry)? {
        let (geometry, outcome) = normalize_part(part)?;
        if outcome == RepairOutcome::Unrepairable {
            tracing::warn!("Geometry could not be repaired, keeping it unchanged");
        }
        stats.record(outcome);
        flat.push(geometry);
    }
    Ok(flat)
}

/// Rebuild polygons from flattened rings, one polygon per ring
pub fn to_polygons(flat: &FlatGeometry) -> Vec<Polygon<f64>> {
    flat.rings()
        .iter()
        .map(|ring| {
            let coords: Vec<(f64, f64)> = ring.iter().map(|[x, y]| (*x, *y)).collect();
            Polygon::new(LineString::from(coords), vec![])
        })
        .collect()
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
