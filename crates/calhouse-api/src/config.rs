use std::env;

use calhouse_core::config::{DataPaths, LayeredConfig, CONFIG_FILE_NAME};
use calhouse_core::error::Result;

/// Dashboard server configuration: bind address from the environment,
/// data locations from the layered config
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
    pub paths: DataPaths,
}

impl ApiConfig {
    /// Load configuration from `calhouse.toml` (if present) and environment variables
    pub fn from_env() -> Result<Self> {
        let layered = LayeredConfig::with_defaults()
            .load_from_optional_file(CONFIG_FILE_NAME)?
            .load_from_env();

        let port = env::var("CALHOUSE_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8501);

        let host = env::var("CALHOUSE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let cors_origin = env::var("CALHOUSE_CORS_ORIGIN").ok().filter(|o| !o.trim().is_empty());

        Ok(Self {
            host,
            port,
            cors_origin,
            paths: layered.paths(),
        })
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::path::PathBuf;

    fn clear_env() {
        for key in ["CALHOUSE_PORT", "CALHOUSE_HOST", "CALHOUSE_CORS_ORIGIN", "CALHOUSE_MODEL"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8501");
        assert!(config.cors_origin.is_none());
        assert_eq!(config.paths.model, PathBuf::from("models/best_model.json"));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("CALHOUSE_PORT", "9000");
        env::set_var("CALHOUSE_HOST", "0.0.0.0");
        env::set_var("CALHOUSE_CORS_ORIGIN", "http://localhost:3000");
        env::set_var("CALHOUSE_MODEL", "/srv/models/ridge.json");

        let config = ApiConfig::from_env().unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.paths.model, PathBuf::from("/srv/models/ridge.json"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_port_falls_back() {
        clear_env();
        env::set_var("CALHOUSE_PORT", "http");
        assert_eq!(ApiConfig::from_env().unwrap().port, 8501);
        clear_env();
    }
}
