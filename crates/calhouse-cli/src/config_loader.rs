//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use calhouse_core::config::{LayeredConfig, CONFIG_FILE_NAME};

use crate::cli::Cli;
use crate::errors;

/// Resolve configuration: defaults, then the config file, then the
/// environment, then command-line flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                return Err(errors::config_file_not_found(path).into());
            }
            LayeredConfig::with_defaults()
                .load_from_file(path)
                .with_context(|| format!("Failed to load configuration file {}", path.display()))?
        }
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(CONFIG_FILE_NAME)
            .context("Failed to load configuration file")?,
    };

    let mut config = config.load_from_env();
    config.update_from_cli(cli.overrides());

    let paths = config.paths();
    tracing::debug!(
        housing_data = %paths.housing_data.display(),
        geo_data = %paths.geo_data.display(),
        model = %paths.model.display(),
        page_text = %paths.page_text.display(),
        "Resolved configuration"
    );
    Ok(config)
}
