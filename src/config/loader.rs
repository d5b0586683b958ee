//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PorterConfig;
use crate::domain::errors::PorterError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PorterConfig
/// 4. Applies environment variable overrides (PORTER_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use porter::config::loader::load_config;
///
/// let config = load_config("porter.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PorterConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(PorterError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        PorterError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: PorterConfig = toml::from_str(&contents)
        .map_err(|e| PorterError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config);

    // Validate configuration
    config
        .validate()
        .map_err(|e| PorterError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PorterError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PORTER_* prefix
///
/// Environment variables follow the pattern: PORTER_<SECTION>_<KEY>
/// For example: PORTER_EXPORT_BASE_DIR, PORTER_PREFERENCES_DEFAULT_FORMAT
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut PorterConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("PORTER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Export overrides
    if let Ok(val) = std::env::var("PORTER_EXPORT_BASE_DIR") {
        config.export.base_dir = val;
    }
    if let Ok(val) = std::env::var("PORTER_EXPORT_DESTINATION") {
        if let Ok(destination) = val.parse() {
            config.export.destination = destination;
        }
    }

    // Preference overrides
    if let Ok(val) = std::env::var("PORTER_PREFERENCES_DEFAULT_FORMAT") {
        config.preferences.default_format = val;
    }
    if let Ok(val) = std::env::var("PORTER_PREFERENCES_EXPORT_ALL_TRANSACTIONS") {
        config.preferences.export_all_transactions = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PORTER_PREFERENCES_DELETE_TRANSACTIONS_AFTER_EXPORT") {
        config.preferences.delete_transactions_after_export = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PORTER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PORTER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/porter.toml");
        assert!(matches!(result, Err(PorterError::Configuration(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let file = write_config(
            r#"
            [export]
            base_dir = "/exports"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.export.base_dir, "/exports");
        assert_eq!(config.preferences.default_format, "qif");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let file = write_config("export = base_dir =");
        let result = load_config(file.path());
        assert!(matches!(result, Err(PorterError::Configuration(_))));
    }

    #[test]
    fn test_load_config_validation_failure() {
        let file = write_config(
            r#"
            [export]
            base_dir = "/exports"

            [preferences]
            default_format = "csv"
            "#,
        );

        let result = load_config(file.path());
        assert!(matches!(result, Err(PorterError::Configuration(_))));
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("PORTER_TEST_SUBST_DIR", "/exports/from-env");
        let input = "[export]\nbase_dir = \"${PORTER_TEST_SUBST_DIR}\"\n";

        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("/exports/from-env"));
        std::env::remove_var("PORTER_TEST_SUBST_DIR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let input = "[export]\nbase_dir = \"${PORTER_TEST_UNSET_VARIABLE}\"\n";
        let result = substitute_env_vars(input);
        assert!(matches!(result, Err(PorterError::Configuration(_))));
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        let input = "# base_dir = \"${PORTER_TEST_COMMENTED_VARIABLE}\"\n[export]\nbase_dir = \"/exports\"\n";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${PORTER_TEST_COMMENTED_VARIABLE}"));
    }
}
