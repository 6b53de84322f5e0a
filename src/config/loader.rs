use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Accepted UI tick interval range, in milliseconds.
pub const TICK_RATE_RANGE_MS: RangeInclusive<u64> = 16..=5000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/showroom/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("showroom").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - At least one featured listing is shown
    /// - The tick rate is within [`TICK_RATE_RANGE_MS`]
    /// - The start location is empty or an absolute path
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.featured_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "display.featured_limit must be at least 1".to_string(),
            });
        }

        let tick = self.display.tick_rate_ms;
        if !TICK_RATE_RANGE_MS.contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "display.tick_rate_ms must be between {} and {}, got {}",
                    TICK_RATE_RANGE_MS.start(),
                    TICK_RATE_RANGE_MS.end(),
                    tick
                ),
            });
        }

        let start = &self.navigation.start_location;
        if !start.is_empty() && !start.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "navigation.start_location '{}' must start with '/'",
                    start
                ),
            });
        }

        Ok(())
    }
}
