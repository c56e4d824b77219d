//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every field has a default so a minimal (or absent) config is valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the host.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Hosting environment name, reported in the startup status lines.
    pub environment: String,

    /// Content root reported in the startup status lines.
    pub content_root: PathBuf,

    /// Suppress the startup and shutting-down status lines.
    pub suppress_status_messages: bool,

    /// Listener configuration for the hosted service.
    pub listener: ListenerConfig,

    /// Graceful-stop settings.
    pub shutdown: ShutdownConfig,
}

impl HostConfig {
    /// Graceful-stop deadline as a `Duration`.
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown.timeout_secs)
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            content_root: default_content_root(),
            suppress_status_messages: false,
            listener: ListenerConfig::default(),
            shutdown: ShutdownConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Graceful-stop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long a stopping service may keep draining before remaining work
    /// is abandoned.
    pub timeout_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_content_root() -> PathBuf {
    PathBuf::from(".")
}
