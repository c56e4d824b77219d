//! Bounded-time graceful stop.
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities; the deadline always wins
//! - Deadline expiry is not an error: remaining work is abandoned and the
//!   service contract makes it responsible for forcibly terminating what
//!   is left
//! - Stop errors are logged, never propagated past the deadline enforcement

use std::time::Duration;

use crate::lifecycle::service::Service;

/// Ask `service` to stop and wait at most `deadline` for confirmation.
///
/// Public entry point for callers that want to stop a service directly,
/// bypassing the controller's wait-for-trigger phase. Returns within
/// `deadline` plus negligible overhead regardless of what the service does.
pub async fn stop_with_deadline<S: Service>(service: &mut S, deadline: Duration) {
    tracing::info!(timeout_secs = deadline.as_secs(), "Stopping service");

    match tokio::time::timeout(deadline, service.stop(deadline)).await {
        Ok(Ok(())) => tracing::info!("Service stopped cleanly"),
        Ok(Err(error)) => {
            tracing::error!(error = %error, "Service reported an error while stopping");
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = deadline.as_secs(),
                "Stop deadline elapsed; abandoning remaining work"
            );
        }
    }
}
