//! Counties command implementation

use anyhow::Result;
use calhouse_core::config::DataPaths;
use calhouse_store::load_counties;
use tabled::Tabled;

use super::explained;
use crate::output::OutputWriter;
use crate::output_types::{CountiesOutput, CountyInfo};

pub fn execute(paths: &DataPaths, output: &OutputWriter) -> Result<()> {
    let counties = explained(load_counties(&paths.geo_data), paths)?;

    let infos: Vec<CountyInfo> = counties
        .names()
        .into_iter()
        .filter_map(|name| {
            let first = counties.first_for(name).ok()?;
            Some(CountyInfo {
                name: name.to_string(),
                parts: counties.rows_for(name).count(),
                ocean_proximity: first.ocean_proximity.clone(),
                median_income_cat: first.median_income_cat.clone(),
            })
        })
        .collect();

    if output.is_json() {
        return output.result(CountiesOutput { counties: infos });
    }

    output.section(format!("Counties ({})", infos.len()));

    #[derive(Tabled)]
    struct CountyRow {
        #[tabled(rename = "County")]
        name: String,
        #[tabled(rename = "Parts")]
        parts: usize,
        #[tabled(rename = "Ocean proximity")]
        ocean_proximity: String,
        #[tabled(rename = "Income category")]
        median_income_cat: String,
    }

    let rows: Vec<CountyRow> = infos
        .into_iter()
        .map(|c| CountyRow {
            name: c.name,
            parts: c.parts,
            ocean_proximity: c.ocean_proximity,
            median_income_cat: c.median_income_cat,
        })
        .collect();

    output.table(rows);
    Ok(())
}
