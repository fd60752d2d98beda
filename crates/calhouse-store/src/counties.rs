//! County boundary table loading.

use std::path::Path;

use calhouse_core::error::Result;
use calhouse_core::models::{CountyRecord, CountyTable};
use calhouse_geo::{normalize, NormalizeStats};

use crate::geoparquet::read_geoparquet;

/// Load the county GeoParquet file and normalize its geometries.
///
/// Multi-polygons are exploded, so a county can span several rows that share
/// its attribute values. Rows without a geometry are skipped.
pub fn load_counties(path: &Path) -> Result<CountyTable> {
    let geo = read_geoparquet(path)?;
    let table = &geo.table;

    let name = table.required_string("name")?;
    let longitude = table.required_f64("longitude")?;
    let latitude = table.required_f64("latitude")?;
    let total_rooms = table.required_f64("total_rooms")?;
    let population = table.required_f64("population")?;
    let rooms_per_household = table.required_f64("rooms_per_household")?;
    let bedrooms_per_room = table.required_f64("bedrooms_per_room")?;
    let population_per_household = table.required_f64("population_per_household")?;
    let ocean_proximity = table.required_string("ocean_proximity")?;
    let median_income_cat = table.required_string("median_income_cat")?;

    let mut stats = NormalizeStats::default();
    let mut records = Vec::with_capacity(geo.geometries.len());

    for (row, geometry) in geo.geometries.into_iter().enumerate() {
        let Some(geometry) = geometry else {
            tracing::warn!(
                row,
                county = %name[row],
                column = %geo.geometry_column,
                "Row has no geometry, skipping"
            );
            continue;
        };

        for geometry in normalize(geometry, &mut stats)? {
            records.push(CountyRecord {
                name: name[row].clone(),
                longitude: longitude[row],
                latitude: latitude[row],
                total_rooms: total_rooms[row],
                population: population[row],
                rooms_per_household: rooms_per_household[row],
                bedrooms_per_room: bedrooms_per_room[row],
                population_per_household: population_per_household[row],
                ocean_proximity: ocean_proximity[row].clone(),
                median_income_cat: median_income_cat[row].clone(),
                geometry,
            });
        }
    }

    let counties = CountyTable::new(records);
    tracing::info!(
        path = %path.display(),
        counties = counties.names().len(),
        rows = counties.len(),
        repaired = stats.repaired,
        unrepairable = stats.unrepairable,
        "Loaded county boundaries"
    );
    Ok(counties)
}
