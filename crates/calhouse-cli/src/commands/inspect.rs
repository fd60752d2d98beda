//! Inspect command implementation

use anyhow::Result;
use calhouse_core::config::{DataPaths, LayeredConfig};
use calhouse_core::Predictor;
use calhouse_model::load_model;
use calhouse_store::{load_counties, load_housing};
use tabled::Tabled;

use super::explained;
use crate::cli::{InspectArgs, InspectTarget};
use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, InspectConfigOutput, InspectCountiesOutput, InspectModelOutput};

pub fn execute(args: InspectArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let paths = config.paths();

    match args.target {
        InspectTarget::Housing => inspect_housing(&paths, output),
        InspectTarget::Counties => inspect_counties(&paths, output),
        InspectTarget::Model => inspect_model(&paths, output),
        InspectTarget::Config => inspect_config(config, output),
    }
}

/// Summarize the housing feature table
fn inspect_housing(paths: &DataPaths, output: &OutputWriter) -> Result<()> {
    let housing = explained(load_housing(&paths.housing_data), paths)?;
    let summary = housing.summary();

    if output.is_json() {
        return output.result(summary);
    }

    output.section("Housing Features");
    output.kv("Path", paths.housing_data.display());
    output.kv("Rows", summary.rows);
    if let Some(mean) = summary.mean_median_income {
        output.kv("Mean median income", format!("{:.4}", mean));
    }
    match summary.mean_median_house_value {
        Some(mean) => output.kv("Mean median house value", format!("{:.2}", mean)),
        None => output.kv("Mean median house value", "(column not present)"),
    }

    #[derive(Tabled)]
    struct ProximityRow {
        #[tabled(rename = "Ocean proximity")]
        category: String,
        #[tabled(rename = "Rows")]
        rows: usize,
    }

    output.section("By Ocean Proximity");
    let rows: Vec<ProximityRow> = summary
        .by_ocean_proximity
        .into_iter()
        .map(|(category, rows)| ProximityRow { category, rows })
        .collect();
    output.table(rows);

    Ok(())
}

/// Report the size of the normalized county table
fn inspect_counties(paths: &DataPaths, output: &OutputWriter) -> Result<()> {
    let counties = explained(load_counties(&paths.geo_data), paths)?;

    let stats = InspectCountiesOutput {
        counties: counties.names().len(),
        rows: counties.len(),
        rings: counties.records().iter().map(|r| r.geometry.rings().len()).sum(),
        coordinates: counties.records().iter().map(|r| r.geometry.coord_count()).sum(),
    };

    if output.is_json() {
        return output.result(stats);
    }

    output.section("County Boundaries");
    output.kv("Path", paths.geo_data.display());
    output.kv("Counties", stats.counties);
    output.kv("Rows (after exploding multi-polygons)", stats.rows);
    output.kv("Rings", stats.rings);
    output.kv("Coordinates", stats.coordinates);
    Ok(())
}

/// Show the model and its coefficients, most negative first
fn inspect_model(paths: &DataPaths, output: &OutputWriter) -> Result<()> {
    let model = explained(load_model(&paths.model), paths)?;
    let coefficients = model.coefficients();

    if output.is_json() {
        return output.result(InspectModelOutput {
            name: model.model_name().to_string(),
            kind: model.kind().to_string(),
            coefficients,
        });
    }

    output.section("Model");
    output.kv("Path", paths.model.display());
    output.kv("Name", model.model_name());
    output.kv("Kind", model.kind());

    if coefficients.is_empty() {
        output.info("Model has no coefficients");
        return Ok(());
    }

    #[derive(Tabled)]
    struct CoefficientRow {
        #[tabled(rename = "Term")]
        term: String,
        #[tabled(rename = "Coefficient")]
        value: String,
    }

    output.section("Coefficients");
    let rows: Vec<CoefficientRow> = coefficients
        .into_iter()
        .map(|c| CoefficientRow {
            term: c.term,
            value: format!("{:.4}", c.value),
        })
        .collect();
    output.table(rows);
    Ok(())
}

/// Show each configuration value and where it came from
fn inspect_config(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        return output.result(InspectConfigOutput { config: entries });
    }

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    output.section("Configuration");
    let rows: Vec<ConfigRow> = entries
        .into_iter()
        .map(|e| ConfigRow {
            key: e.key,
            value: e.value,
            source: format!("{:?}", e.source),
        })
        .collect();
    output.table(rows);
    Ok(())
}
