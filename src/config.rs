//! Configuration management for the trip planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PlannerError;
use crate::dataset::dataset;
use crate::models::{DAYS_RANGE, TRAVELERS_RANGE, TripRequest};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for the trip planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Selections used when the user leaves one out
    pub defaults: DefaultsConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default trip selections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_route")]
    pub route: String,
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default = "default_budget")]
    pub budget: f64,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_route() -> String {
    "bg-de".to_string()
}

fn default_transport() -> String {
    "car".to_string()
}

fn default_days() -> u32 {
    5
}

fn default_travelers() -> u32 {
    2
}

fn default_tier() -> String {
    "standard".to_string()
}

fn default_budget() -> f64 {
    3000.0
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            route: default_route(),
            transport: default_transport(),
            days: default_days(),
            travelers: default_travelers(),
            tier: default_tier(),
            budget: default_budget(),
        }
    }
}

impl DefaultsConfig {
    /// Turn the configured selections into a request
    pub fn to_request(&self) -> crate::Result<TripRequest> {
        TripRequest::parse(
            &self.route,
            &self.transport,
            self.days,
            self.travelers,
            &self.tier,
            self.budget,
        )
    }
}

impl PlannerConfig {
    /// Load configuration from specified path.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn load_from_path(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match config_path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                if let Some(path) = Self::get_config_path().filter(|p| p.exists()) {
                    builder = builder.add_source(
                        File::from(path)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // Environment overrides, e.g. TRIP_PLANNER_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("TRIP_PLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trip-planner").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.route.is_empty() {
            self.defaults.route = default_route();
        }
        if self.defaults.transport.is_empty() {
            self.defaults.transport = default_transport();
        }
        if self.defaults.tier.is_empty() {
            self.defaults.tier = default_tier();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_string_values()?;
        self.validate_defaults()?;
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.server.port == 0 {
            return Err(PlannerError::config("Server port cannot be 0").into());
        }

        Ok(())
    }

    /// Validate the default selections against the dataset and the selectable ranges
    fn validate_defaults(&self) -> Result<()> {
        let defaults = &self.defaults;

        if !DAYS_RANGE.contains(&defaults.days) {
            return Err(PlannerError::config(format!(
                "Default days must be between {} and {}",
                DAYS_RANGE.start(),
                DAYS_RANGE.end()
            ))
            .into());
        }

        if !TRAVELERS_RANGE.contains(&defaults.travelers) {
            return Err(PlannerError::config(format!(
                "Default travelers must be between {} and {}",
                TRAVELERS_RANGE.start(),
                TRAVELERS_RANGE.end()
            ))
            .into());
        }

        if dataset().route(&defaults.route).is_err() {
            return Err(PlannerError::config(format!(
                "Default route '{}' is not a known route",
                defaults.route
            ))
            .into());
        }

        defaults
            .to_request()
            .map_err(|err| PlannerError::config(format!("Invalid default selection: {err}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PricingTier, TransportMode};
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile, TempDir};

    fn write_config(contents: &str) -> NamedTempFile {
        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.defaults.route, "bg-de");
        assert_eq!(config.defaults.days, 5);
        assert_eq!(config.defaults.travelers, 2);
        assert_eq!(config.defaults.budget, 3000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_to_request() {
        let request = PlannerConfig::default().defaults.to_request().unwrap();
        assert_eq!(request.transport, TransportMode::Car);
        assert_eq!(request.tier, PricingTier::Standard);
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = PlannerConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_default_ranges() {
        let mut config = PlannerConfig::default();
        config.defaults.days = 30;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Default days"));

        let mut config = PlannerConfig::default();
        config.defaults.route = "bg-gr".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("not a known route"));

        let mut config = PlannerConfig::default();
        config.defaults.transport = "boat".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid default selection"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = PlannerConfig::default();
        config.logging.level.clear();
        config.defaults.tier.clear();
        config.apply_defaults();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.tier, "standard");
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = write_config(
            "[server]\nport = 9090\n\n[defaults]\nroute = \"bg-ro\"\ntransport = \"train\"\ndays = 3\n",
        );
        let config = PlannerConfig::load_from_path(Some(temp_file.path())).unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.defaults.route, "bg-ro");
        assert_eq!(config.defaults.transport, "train");
        assert_eq!(config.defaults.days, 3);
        assert_eq!(config.defaults.travelers, 2);
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let temp_file = write_config("[logging]\nformat = \"xml\"\n");
        let result = PlannerConfig::load_from_path(Some(temp_file.path()));
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        assert!(PlannerConfig::load_from_path(Some(&path)).is_err());
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = PlannerConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("trip-planner"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
