use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use calhouse_core::config::CliConfigOverrides;
use calhouse_core::models::{AGE_INPUT, INCOME_INPUT};

/// calhouse - California house price predictions by county
#[derive(Parser, Debug)]
#[command(name = "calhouse")]
#[command(about = "California house price predictions by county", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./calhouse.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Housing feature table (parquet)
    #[arg(long, global = true, value_name = "PATH")]
    pub housing_data: Option<PathBuf>,

    /// County boundaries (GeoParquet)
    #[arg(long, global = true, value_name = "PATH")]
    pub geo_data: Option<PathBuf>,

    /// Model artifact (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Page text (markdown)
    #[arg(long, global = true, value_name = "PATH")]
    pub page_text: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn overrides(&self) -> CliConfigOverrides {
        CliConfigOverrides {
            housing_data: self.housing_data.clone(),
            geo_data: self.geo_data.clone(),
            model: self.model.clone(),
            page_text: self.page_text.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the counties offered by the form
    Counties,

    /// Predict the median house value for a county
    Predict(PredictArgs),

    /// Print the map description for a county
    Map(MapArgs),

    /// Inspect loaded data, the model or configuration
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct PredictArgs {
    /// County name, as listed by `calhouse counties`
    #[arg(long)]
    pub county: String,

    /// House age in years (1-50)
    #[arg(long, default_value_t = AGE_INPUT.default as u32)]
    pub age: u32,

    /// Median income in thousands of US$ (5-100)
    #[arg(long, default_value_t = INCOME_INPUT.default)]
    pub income: f64,
}

#[derive(Parser, Debug)]
pub struct MapArgs {
    /// County to highlight and center on
    #[arg(long)]
    pub county: String,

    /// Write the deck JSON to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// What to inspect
    #[arg(value_enum)]
    pub target: InspectTarget,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InspectTarget {
    /// Housing feature table summary
    Housing,
    /// County table: rows, parts and geometry sizes
    Counties,
    /// Model name, kind and coefficients
    Model,
    /// Resolved configuration and where each value came from
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_defaults() {
        let cli = Cli::try_parse_from(["calhouse", "predict", "--county", "Fresno"]).unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(args.county, "Fresno");
                assert_eq!(args.age, 10);
                assert_eq!(args.income, 45.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::try_parse_from([
            "calhouse",
            "counties",
            "--json",
            "--geo-data",
            "/data/counties.parquet",
        ])
        .unwrap();

        assert!(cli.json);
        let overrides = cli.overrides();
        assert_eq!(overrides.geo_data, Some(PathBuf::from("/data/counties.parquet")));
        assert!(overrides.model.is_none());
    }

    #[test]
    fn test_inspect_target() {
        let cli = Cli::try_parse_from(["calhouse", "inspect", "model"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Inspect(InspectArgs { target: InspectTarget::Model })
        ));
    }

    #[test]
    fn test_map_requires_county() {
        assert!(Cli::try_parse_from(["calhouse", "map"]).is_err());
    }
}
