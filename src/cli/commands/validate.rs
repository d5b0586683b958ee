//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Porter configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Export Directory: {}", config.export.base_dir);
        println!("  Destination Index: {}", config.export.destination);
        println!("  Default Format: {}", config.preferences.default_format);
        println!(
            "  Export All Transactions: {}",
            config.preferences.export_all_transactions
        );
        println!(
            "  Delete After Export: {}",
            config.preferences.delete_transactions_after_export
        );
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();
        Ok(0)
    }
}
