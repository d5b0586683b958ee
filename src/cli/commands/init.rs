//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "porter.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Porter configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Write to file
        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point export.base_dir at an existing directory");
                println!("  3. Validate configuration: porter validate-config");
                println!("  4. Preview the next export: porter preview");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Porter Configuration File
# Export orchestration for financial ledger data

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[export]
# Base directory where export artifacts are written
base_dir = "/home/user/exports"

# Destination-chooser position: 0 shares the artifact with another
# application, any other value persists it to durable storage
destination = 0

[preferences]
# Default interchange format (qif or ofx)
default_format = "qif"

# Include previously-exported transactions as well as new ones
export_all_transactions = false

# Purge ledger records after a successful export
delete_transactions_after_export = false

[logging]
# Enable local file logging
local_enabled = false

# Local log file path
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "porter.toml".to_string(),
            force: false,
        };

        assert_eq!(args.output, "porter.toml");
        assert!(!args.force);
    }

    #[test]
    fn test_generated_config_parses_and_validates() {
        let config: crate::config::PorterConfig =
            toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_covers_sections() {
        let config = InitArgs::generate_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[export]"));
        assert!(config.contains("[preferences]"));
        assert!(config.contains("[logging]"));
    }
}
