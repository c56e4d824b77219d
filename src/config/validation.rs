//! Configuration validation.
//!
//! Serde handles syntactic checks; this module covers the semantic ones.
//! All problems are collected and returned together, not just the first.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::HostConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("environment must not be empty")]
    EmptyEnvironment,

    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("shutdown.timeout_secs must be greater than zero")]
    ZeroShutdownTimeout,
}

/// Validate a config, returning every problem found.
pub fn validate_config(config: &HostConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.environment.trim().is_empty() {
        errors.push(ValidationError::EmptyEnvironment);
    }
    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.shutdown.timeout_secs == 0 {
        errors.push(ValidationError::ZeroShutdownTimeout);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
