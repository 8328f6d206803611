//! Configuration management
//!
//! Loads user settings from `config.toml` in the platform config directory
//! (`~/.config/swellscore/` on Linux) or from an explicit path. A missing or
//! invalid file falls back to defaults: Peniche with the default beach profile.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::data::Location;
use crate::quality::BreakProfile;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur when reading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file format: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spot ID used when `--spot` is omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_spot: Option<String>,
    /// Location used when no spot or coordinates are given
    pub location: LocationConfig,
    /// Break profile used when no spot or profile flags are given
    pub profile: BreakProfile,
    pub display: DisplayConfig,
}

/// Default coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: 39.3558,
            longitude: -9.3811,
        }
    }
}

impl From<LocationConfig> for Location {
    fn from(config: LocationConfig) -> Self {
        Location::new(config.latitude, config.longitude)
    }
}

/// Output formatting options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print times in UTC instead of the local time zone
    pub utc: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_spot: None,
            location: LocationConfig::default(),
            profile: BreakProfile::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file in the platform config directory.
    ///
    /// Returns `None` if no home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "swellscore")?;
        Some(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from_path(path),
            None => {
                warn!("Could not determine config directory, using default configuration");
                Self::default()
            }
        }
    }

    /// Load from `path`, falling back to defaults if the file is missing or invalid.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using default configuration", path.display());
            return Self::default();
        }

        match Self::try_load_from_path(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{} ({}), using default configuration", e, path.display());
                Self::default()
            }
        }
    }

    /// Load from `path`, reporting any read or parse failure.
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}
