//! Configuration management for Porter.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Porter uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`PORTER_*` prefix)
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```no_run
//! use porter::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("porter.toml")?;
//!
//! println!("Export directory: {}", config.export.base_dir);
//! println!("Default format: {}", config.preferences.default_format);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! base_dir = "/home/user/exports"
//! destination = 0
//!
//! [preferences]
//! default_format = "qif"
//! export_all_transactions = false
//! delete_transactions_after_export = false
//!
//! [logging]
//! local_enabled = false
//! local_path = "logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportDirConfig, LoggingConfig, PorterConfig, PreferencesConfig,
};
