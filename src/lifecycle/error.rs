//! Error types for controller runs.

use thiserror::Error;

/// Type-erased error, used for startup callbacks and service error sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced to the caller of
/// [`LifecycleController::run`](crate::lifecycle::LifecycleController::run).
///
/// Stop-phase errors are deliberately absent: the stop deadline always wins
/// and a failing stop is logged, not propagated.
#[derive(Debug, Error)]
pub enum RunError {
    /// The hosted service failed to start. Nothing was started, so no stop
    /// sequence runs.
    #[error("Service failed to start: {0}")]
    Start(#[source] BoxError),

    /// The post-startup callback reported an error. The service was still
    /// stopped gracefully before this was returned.
    #[error("Startup callback failed: {0}")]
    StartupCallback(#[source] BoxError),

    /// A process-wide signal listener could not be registered.
    #[error("Failed to register signal listener: {0}")]
    SignalRegistration(#[source] std::io::Error),
}
