use crate::error::{CalhouseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "calhouse.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Resolved locations of every input file the dashboard reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPaths {
    pub housing_data: PathBuf,
    pub geo_data: PathBuf,
    pub model: PathBuf,
    pub page_text: PathBuf,
}

/// Layered configuration for calhouse
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub housing_data: ConfigValue<PathBuf>,
    pub geo_data: ConfigValue<PathBuf>,
    pub model: ConfigValue<PathBuf>,
    pub page_text: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            housing_data: ConfigValue::new(
                PathBuf::from("data/interim/housing.parquet"),
                ConfigSource::Default,
            ),
            geo_data: ConfigValue::new(
                PathBuf::from("data/processed/counties.parquet"),
                ConfigSource::Default,
            ),
            model: ConfigValue::new(PathBuf::from("models/best_model.json"), ConfigSource::Default),
            page_text: ConfigValue::new(PathBuf::from("pages/01_home.md"), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| CalhouseError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CalhouseError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(path) = file_config.housing_data {
            self.housing_data.update(path, ConfigSource::File);
        }

        if let Some(path) = file_config.geo_data {
            self.geo_data.update(path, ConfigSource::File);
        }

        if let Some(path) = file_config.model {
            self.model.update(path, ConfigSource::File);
        }

        if let Some(path) = file_config.page_text {
            self.page_text.update(path, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the config file if it exists, otherwise keep the current values
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        if let Some(path) = non_empty_env("CALHOUSE_HOUSING_DATA") {
            self.housing_data.update(path, ConfigSource::Environment);
        }

        if let Some(path) = non_empty_env("CALHOUSE_GEO_DATA") {
            self.geo_data.update(path, ConfigSource::Environment);
        }

        if let Some(path) = non_empty_env("CALHOUSE_MODEL") {
            self.model.update(path, ConfigSource::Environment);
        }

        if let Some(path) = non_empty_env("CALHOUSE_PAGE_TEXT") {
            self.page_text.update(path, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(path) = overrides.housing_data {
            self.housing_data.update(path, ConfigSource::Cli);
        }

        if let Some(path) = overrides.geo_data {
            self.geo_data.update(path, ConfigSource::Cli);
        }

        if let Some(path) = overrides.model {
            self.model.update(path, ConfigSource::Cli);
        }

        if let Some(path) = overrides.page_text {
            self.page_text.update(path, ConfigSource::Cli);
        }
    }

    /// Resolved file locations
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            housing_data: self.housing_data.value.clone(),
            geo_data: self.geo_data.value.clone(),
            model: self.model.value.clone(),
            page_text: self.page_text.value.clone(),
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        for (key, value) in [
            ("housing_data", &self.housing_data),
            ("geo_data", &self.geo_data),
            ("model", &self.model),
            ("page_text", &self.page_text),
        ] {
            map.insert(key.to_string(), (value.value.display().to_string(), value.source));
        }

        map
    }
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    env::var(key).ok().filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    housing_data: Option<PathBuf>,
    geo_data: Option<PathBuf>,
    model: Option<PathBuf>,
    page_text: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub housing_data: Option<PathBuf>,
    pub geo_data: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub page_text: Option<PathBuf>,
}
