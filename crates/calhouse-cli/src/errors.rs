use console::style;
use std::fmt;
use std::path::Path;

use calhouse_core::config::DataPaths;
use calhouse_core::error::CalhouseError;

/// Enhanced error type with suggestions
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Config key, env var and flag that set an input file
fn setting_for(path: &Path, paths: &DataPaths) -> Option<(&'static str, &'static str, &'static str)> {
    if path == paths.housing_data {
        Some(("housing_data", "CALHOUSE_HOUSING_DATA", "--housing-data"))
    } else if path == paths.geo_data {
        Some(("geo_data", "CALHOUSE_GEO_DATA", "--geo-data"))
    } else if path == paths.model {
        Some(("model", "CALHOUSE_MODEL", "--model"))
    } else if path == paths.page_text {
        Some(("page_text", "CALHOUSE_PAGE_TEXT", "--page-text"))
    } else {
        None
    }
}

/// Create error for a missing input file
pub fn data_file_not_found(path: &Path, paths: &DataPaths) -> CliError {
    let error = CliError::new("Input file not found")
        .with_context(format!("The file does not exist.\n\nPath: {}", path.display()));

    match setting_for(path, paths) {
        Some((key, env_var, flag)) => error
            .with_suggestion(format!("Pass the location: calhouse {} <PATH> ...", flag))
            .with_suggestion(format!("Or set {}: export {}=<PATH>", key, env_var))
            .with_suggestion(format!("Or add to calhouse.toml:\n  {} = \"<PATH>\"", key))
            .with_help("Run: calhouse inspect config"),
        None => error.with_help("Run: calhouse inspect config"),
    }
}

/// Create error for an explicit --config that does not exist
pub fn config_file_not_found(path: &Path) -> CliError {
    CliError::new("Configuration file not found")
        .with_context(format!("Path: {}", path.display()))
        .with_suggestion("Check the --config path")
        .with_suggestion("Or omit --config to use ./calhouse.toml when present")
}

/// Create error for an unknown county
pub fn county_not_found(name: &str) -> CliError {
    CliError::new(format!("County not found: {}", name))
        .with_context("County names are matched exactly, including case.")
        .with_suggestion("List the available counties: calhouse counties")
        .with_help("Run: calhouse predict --help")
}

/// Create error for a widget value outside its range
pub fn input_out_of_range(field: &str, value: f64, min: f64, max: f64) -> CliError {
    let flag = match field {
        "housing_median_age" => "--age",
        "median_income" => "--income",
        other => other,
    };
    CliError::new(format!("{} is out of range", flag))
        .with_context(format!("Got {}, accepted values are {} to {}.", value, min, max))
        .with_suggestion(format!("Pass a value between {} and {}", min, max))
        .with_help("Run: calhouse predict --help")
}

/// Create error for a county file without GeoParquet metadata
pub fn not_geoparquet(path: &Path) -> CliError {
    CliError::new("County file is not GeoParquet")
        .with_context(format!(
            "The file has no 'geo' metadata, so the geometry column cannot be located.\n\nPath: {}",
            path.display()
        ))
        .with_suggestion("Write the file with GeoDataFrame.to_parquet so the metadata is kept")
        .with_help("Run: calhouse inspect config")
}

/// Create error for a model artifact that cannot be used
pub fn model_load_failed(path: &Path, reason: &str) -> CliError {
    CliError::new("Cannot load the model")
        .with_context(format!("Path: {}\nReason: {}", path.display(), reason))
        .with_suggestion("Export the model again with format_version 1")
        .with_suggestion("Or point to another artifact: calhouse --model <PATH> ...")
        .with_help("Run: calhouse inspect config")
}

/// Turn a library error into a CLI error with suggestions where one applies
pub fn explain(err: CalhouseError, paths: &DataPaths) -> anyhow::Error {
    match &err {
        CalhouseError::DatasetNotFound { path } => data_file_not_found(path, paths).into(),
        CalhouseError::NotGeoParquet { path } => not_geoparquet(path).into(),
        CalhouseError::ModelLoad { path, reason } => model_load_failed(path, reason).into(),
        CalhouseError::CountyNotFound { name } => county_not_found(name).into(),
        CalhouseError::InputOutOfRange { field, value, min, max } => {
            input_out_of_range(field, *value, *min, *max).into()
        }
        _ => anyhow::Error::new(err),
    }
}
