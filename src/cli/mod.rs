//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Porter using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Porter - Ledger Export Orchestration Tool
#[derive(Parser, Debug)]
#[command(name = "porter")]
#[command(version, about, long_about = None)]
#[command(author = "Porter Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "porter.toml", env = "PORTER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PORTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview the export request the current configuration would produce
    Preview(commands::preview::PreviewArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
