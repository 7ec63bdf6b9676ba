use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// User-facing application configuration, read from config.toml.
///
/// The file is optional and never written back; the element list itself is
/// not part of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Returns the config file path within the given config directory.
    pub fn path(config_dir: &Path) -> PathBuf {
        config_dir.join("elist").join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !is_positive(self.window.width) {
            errors.push("window.width must be greater than 0".to_string());
        }
        if !is_positive(self.window.height) {
            errors.push("window.height must be greater than 0".to_string());
        }
        if !is_positive(self.window.min_width) {
            errors.push("window.min_width must be greater than 0".to_string());
        }
        if !is_positive(self.window.min_height) {
            errors.push("window.min_height must be greater than 0".to_string());
        }
        if self.logging.filter.trim().is_empty() {
            errors.push("logging.filter must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let pick = |value: f32, default: f32| if is_positive(value) { value } else { default };

        Self {
            window: WindowConfig {
                width: pick(self.window.width, defaults.window.width),
                height: pick(self.window.height, defaults.window.height),
                min_width: pick(self.window.min_width, defaults.window.min_width),
                min_height: pick(self.window.min_height, defaults.window.min_height),
            },
            logging: LoggingConfig {
                filter: if self.logging.filter.trim().is_empty() {
                    defaults.logging.filter
                } else {
                    self.logging.filter.clone()
                },
            },
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Initial window geometry, in logical points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_min_width")]
    pub min_width: f32,
    #[serde(default = "default_min_height")]
    pub min_height: f32,
}

impl WindowConfig {
    pub fn inner_size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    pub fn min_inner_size(&self) -> [f32; 2] {
        [self.min_width, self.min_height]
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

fn default_width() -> f32 {
    500.0
}

fn default_height() -> f32 {
    400.0
}

fn default_min_width() -> f32 {
    360.0
}

fn default_min_height() -> f32 {
    280.0
}

/// Log output settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string, e.g. `"elist_core=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// Errors that can occur when loading config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
