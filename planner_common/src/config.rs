//! Configuration loading traits and types.
//!
//! This module provides the TOML application configuration for the planner:
//! the shared logging section, the location of the persistent defaults
//! store, and optional starting values for the path configuration.
//!
//! # Usage
//!
//! ```rust,no_run
//! use planner_common::config::{ConfigLoader, PlannerConfig, ConfigError};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = PlannerConfig::load(Path::new("config/planner.toml"))?;
//!     config.validate()?;
//!     let path = config.initial_path_config()?;
//!     println!("Field length: {} in", path.field_length());
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::consts::DEFAULT_STORE_PATH;
use crate::path::{PathConfig, SettingsField};

/// Error type for configuration loading operations.
///
/// This enum represents all possible errors that can occur when loading
/// configuration files.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// Common configuration fields.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "planner-4265"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: "planner".to_string(),
        }
    }
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Starting values for the path configuration, in entered units.
///
/// Any omitted value falls back to the built-in default. The values go
/// through the same validation as the settings form.
///
/// ```toml
/// [path]
/// field_length = 52.4375   # ft
/// max_velocity = 12.0      # ft/s
/// min_turn_radius = 18.0   # in
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathStartValues {
    pub field_length: Option<f64>,
    pub field_width: Option<f64>,
    pub max_velocity: Option<f64>,
    pub step_size: Option<f64>,
    pub min_turn_radius: Option<f64>,
    pub max_turn_radius: Option<f64>,
}

impl PathStartValues {
    fn get(&self, field: SettingsField) -> Option<f64> {
        match field {
            SettingsField::FieldLength => self.field_length,
            SettingsField::FieldWidth => self.field_width,
            SettingsField::MaxVelocity => self.max_velocity,
            SettingsField::StepSize => self.step_size,
            SettingsField::MinTurnRadius => self.min_turn_radius,
            SettingsField::MaxTurnRadius => self.max_turn_radius,
        }
    }

    /// Build the initial record: defaults overlaid with the configured values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` naming every rejected field.
    pub fn resolve(&self) -> Result<PathConfig, ConfigError> {
        let defaults = PathConfig::default().entry_values();
        let raw = SettingsField::ALL
            .map(|f| self.get(f).unwrap_or(defaults[f.index()]).to_string());

        let mut config = PathConfig::default();
        config
            .apply_settings(&raw)
            .map_err(|e| ConfigError::ValidationError(format!("[path] {e}")))?;
        Ok(config)
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Application configuration loaded once at startup (`planner.toml`).
///
/// Immutable after loading; passed by reference to whatever needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub shared: SharedConfig,

    /// Persistent defaults store written by `write-defaults`.
    #[serde(default = "default_store_path")]
    pub settings_store: PathBuf,

    #[serde(default)]
    pub path: PathStartValues,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            shared: SharedConfig::default(),
            settings_store: default_store_path(),
            path: PathStartValues::default(),
        }
    }
}

impl PlannerConfig {
    /// Validate the shared section and the starting path values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.path.resolve().map(|_| ())
    }

    /// Initial path configuration for this process.
    pub fn initial_path_config(&self) -> Result<PathConfig, ConfigError> {
        self.path.resolve()
    }
}

/// Trait for loading configuration from TOML files.
///
/// This trait provides a default implementation that works with any type
/// implementing `serde::de::DeserializeOwned`.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound(path.to_path_buf())
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
