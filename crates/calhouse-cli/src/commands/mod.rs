//! Command implementations

mod counties;
mod inspect;
mod map;
mod predict;

use anyhow::Result;
use calhouse_core::config::DataPaths;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::errors;
use crate::output::OutputWriter;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;
    let paths = config.paths();

    match cli.command {
        Commands::Counties => counties::execute(&paths, &output),
        Commands::Predict(args) => predict::execute(args, &paths, &output),
        Commands::Map(args) => map::execute(args, &paths, &output),
        Commands::Inspect(args) => inspect::execute(args, &config, &output),
    }
}

/// Attach suggestions to a library error
fn explained<T>(result: calhouse_core::Result<T>, paths: &DataPaths) -> Result<T> {
    result.map_err(|err| {
        tracing::debug!(error = ?err, "Command failed");
        errors::explain(err, paths)
    })
}
