//! Housing feature table loading.

use std::path::Path;

use calhouse_core::error::Result;
use calhouse_core::models::{HousingRecord, HousingTable};

use crate::table::ParquetTable;

/// Load the housing feature table.
///
/// `total_bedrooms` may contain nulls; `median_house_value` and
/// `median_income_cat` may be absent altogether.
pub fn load_housing(path: &Path) -> Result<HousingTable> {
    let table = ParquetTable::open(path)?;

    let longitude = table.required_f64("longitude")?;
    let latitude = table.required_f64("latitude")?;
    let housing_median_age = table.required_f64("housing_median_age")?;
    let total_rooms = table.required_f64("total_rooms")?;
    let total_bedrooms = table.optional_f64("total_bedrooms")?;
    let population = table.required_f64("population")?;
    let households = table.required_f64("households")?;
    let median_income = table.required_f64("median_income")?;
    let median_house_value = table.optional_f64("median_house_value")?;
    let ocean_proximity = table.required_string("ocean_proximity")?;
    let median_income_cat = table.optional_string("median_income_cat")?;

    let records: Vec<HousingRecord> = (0..table.num_rows())
        .map(|i| HousingRecord {
            longitude: longitude[i],
            latitude: latitude[i],
            housing_median_age: housing_median_age[i],
            total_rooms: total_rooms[i],
            total_bedrooms: total_bedrooms[i],
            population: population[i],
            households: households[i],
            median_income: median_income[i],
            median_house_value: median_house_value[i],
            ocean_proximity: ocean_proximity[i].clone(),
            median_income_cat: median_income_cat[i].clone(),
        })
        .collect();

    tracing::info!(path = %path.display(), rows = records.len(), "Loaded housing features");
    Ok(HousingTable::new(records))
}
