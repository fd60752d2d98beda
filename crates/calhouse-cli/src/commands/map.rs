//! Map command implementation

use std::fs;

use anyhow::{Context, Result};
use calhouse_core::config::DataPaths;
use calhouse_core::MapRenderer;
use calhouse_store::load_counties;

use super::explained;
use crate::cli::MapArgs;
use crate::output::OutputWriter;
use crate::output_types::MapWrittenOutput;

pub fn execute(args: MapArgs, paths: &DataPaths, output: &OutputWriter) -> Result<()> {
    let counties = explained(load_counties(&paths.geo_data), paths)?;
    let deck = explained(MapRenderer::new(&counties).render(&args.county), paths)?;

    let Some(path) = args.output else {
        return output.result(deck);
    };

    let json = serde_json::to_string_pretty(&deck)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    let polygons = deck.layers.iter().map(|layer| layer.data.len()).sum();
    if output.is_json() {
        output.result(MapWrittenOutput {
            county: args.county,
            path: path.display().to_string(),
            polygons,
        })
    } else {
        output.success(format!("Wrote map for {} to {} ({} polygons)", args.county, path.display(), polygons));
        Ok(())
    }
}
