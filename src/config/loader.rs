//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HostConfig;
use crate::config::validation::{ValidationError, validate_config};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: HostConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_file() {
        let path = std::env::temp_dir().join("host-config-load-valid.toml");
        fs::write(&path, "environment = \"staging\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.environment, "staging");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_invalid_file_reports_validation() {
        let path = std::env::temp_dir().join("host-config-load-invalid.toml");
        fs::write(&path, "[shutdown]\ntimeout_secs = 0\n").unwrap();

        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::ZeroShutdownTimeout]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_config(Path::new("/nonexistent/host-config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
