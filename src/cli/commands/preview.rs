//! Preview command implementation
//!
//! This module implements the `preview` command: it resolves preference
//! defaults and CLI overrides into the export request that a confirmation
//! right now would produce, and prints the resulting target path. No
//! exporter is invoked.

use crate::config::load_config;
use crate::domain::{ExportFormat, ExportRequest};
use chrono::Local;
use clap::Args;
use std::str::FromStr;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Override the interchange format (qif or ofx)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Override the destination index (0 = sharing, otherwise durable storage)
    #[arg(short, long)]
    pub destination: Option<usize>,

    /// Include previously-exported transactions as well as new ones
    #[arg(long)]
    pub export_all: bool,

    /// Purge ledger records after a successful export
    #[arg(long)]
    pub delete_after: bool,
}

impl PreviewArgs {
    /// Execute the preview command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Previewing export request");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Resolve format: CLI override wins, otherwise the preference default
        let format = match &self.format {
            Some(name) => match ExportFormat::from_str(name) {
                Ok(format) => format,
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(2);
                }
            },
            None => match config.preferences.format() {
                Ok(format) => format,
                Err(e) => {
                    println!("❌ {e}");
                    return Ok(2);
                }
            },
        };

        let export_all = self.export_all || config.preferences.export_all_transactions;
        let delete_after = self.delete_after || config.preferences.delete_transactions_after_export;
        let destination = self.destination.unwrap_or(config.export.destination);

        let request = match ExportRequest::build(
            format,
            export_all,
            delete_after,
            destination,
            &config.export.base_dir,
            Local::now(),
        ) {
            Ok(request) => request,
            Err(e) => {
                println!("❌ Cannot build export request");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("📋 Export Preview:");
        println!("  Format: {}", request.format());
        println!("  Target: {}", request.target());
        println!("  Output Path: {}", request.target_filepath().display());
        println!("  Export All Transactions: {}", request.export_all_transactions());
        println!(
            "  Delete After Export: {}",
            request.delete_transactions_after_export()
        );
        println!();
        Ok(0)
    }
}
