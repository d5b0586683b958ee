//! Configuration schema types
//!
//! This module defines the configuration structure for Porter. The
//! `[preferences]` section is the injected preference source: it is read
//! once when an export request is built and handed to the core as plain
//! values; no core component performs preference I/O of its own.

use crate::domain::format::ExportFormat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main Porter configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PorterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export output settings
    pub export: ExportDirConfig,

    /// User preference defaults, read once at request-build time
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PorterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.preferences.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDirConfig {
    /// Base directory where export artifacts are written
    pub base_dir: String,

    /// Destination-chooser position: 0 shares the artifact with another
    /// application, any other value persists it to durable storage
    #[serde(default)]
    pub destination: usize,
}

impl ExportDirConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_dir.trim().is_empty() {
            return Err("export.base_dir must not be empty".to_string());
        }
        Ok(())
    }
}

/// User preference defaults
///
/// Mirrors the preference source of the host application: the default
/// interchange format and the two checkbox defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Default interchange format (qif or ofx)
    #[serde(default = "default_export_format")]
    pub default_format: String,

    /// Include previously-exported records as well as new ones
    #[serde(default)]
    pub export_all_transactions: bool,

    /// Purge ledger records after a successful export
    #[serde(default)]
    pub delete_transactions_after_export: bool,
}

impl PreferencesConfig {
    fn validate(&self) -> Result<(), String> {
        ExportFormat::from_str(&self.default_format)?;
        Ok(())
    }

    /// Parses the configured default format
    ///
    /// # Errors
    ///
    /// Returns an error if the configured name is not a known format.
    pub fn format(&self) -> Result<ExportFormat, String> {
        ExportFormat::from_str(&self.default_format)
    }
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            default_format: default_export_format(),
            export_all_transactions: false,
            delete_transactions_after_export: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging with rotation
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily or hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when file logging is enabled".into());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_format() -> String {
    "qif".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
