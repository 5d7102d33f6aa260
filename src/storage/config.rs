//! Application configuration.
//!
//! Settings are read from an optional `config.toml` in the platform data
//! directory. The application never writes this file; a missing file means
//! defaults. The poll rate and output file names are fixed and not part of
//! the configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::sensors::iio::DEFAULT_IIO_ROOT;

/// Which sensor binding to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorBackend {
    /// Native platform sensors (IIO on Linux)
    #[default]
    Platform,
    /// Synthetic readings
    Simulated,
}

impl std::fmt::Display for SensorBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorBackend::Platform => write!(f, "Platform"),
            SensorBackend::Simulated => write!(f, "Simulated"),
        }
    }
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sensor settings
    pub sensors: SensorSettings,
    /// UI settings
    pub ui: UiSettings,
}

/// Sensor-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorSettings {
    /// Sensor binding
    pub backend: SensorBackend,
    /// Root of the sysfs IIO device tree
    pub iio_root: PathBuf,
}

impl Default for SensorSettings {
    fn default() -> Self {
        Self {
            backend: SensorBackend::Platform,
            iio_root: PathBuf::from(DEFAULT_IIO_ROOT),
        }
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Initial theme
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_scale: 1.0,
        }
    }
}

impl UiSettings {
    /// Validate font scale (0.5-3.0).
    pub fn validate_font_scale(scale: f32) -> bool {
        (0.5..=3.0).contains(&scale)
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "sensorlog", "SensorLog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    if !UiSettings::validate_font_scale(config.ui.font_scale) {
        tracing::warn!(
            "Ignoring font_scale {} outside 0.5-3.0",
            config.ui.font_scale
        );
        config.ui.font_scale = UiSettings::default().font_scale;
    }

    Ok(config)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
