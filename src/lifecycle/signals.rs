//! OS signal listeners.
//!
//! # Responsibilities
//! - Register process-wide listeners for SIGTERM, SIGINT and SIGQUIT
//! - Translate each signal into a shutdown request
//! - Hold the process open until the stop sequence has completed
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe); installing a handler
//!   replaces the platform's default terminate-immediately behavior
//! - All listeners share one `ShutdownSignal`: only the first to fire has
//!   an effect, the rest are no-ops
//! - A listener that observed a signal blocks on the `CompletionLatch`
//!   until stop has finished, then exits
//! - SIGQUIT stands in for a pre-teardown hook on unix; non-unix targets
//!   get Ctrl+C only

use std::io;

use tokio::task::JoinHandle;

use crate::lifecycle::shutdown::{CompletionLatch, ShutdownSignal};

/// Process-wide signal listeners, wired at controller start.
///
/// Dropping the struct does not stop the listener tasks; call
/// [`unwire`](Self::unwire) once the controller run is over.
pub struct SignalListeners {
    tasks: Vec<JoinHandle<()>>,
}

impl SignalListeners {
    /// Install listeners for all supported termination signals.
    ///
    /// Fails if the platform refuses a handler registration; the caller
    /// treats that as fatal before starting the service.
    #[cfg(unix)]
    pub fn install(shutdown: ShutdownSignal, latch: CompletionLatch) -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut tasks = Vec::with_capacity(3);
        for (kind, name) in [
            (SignalKind::terminate(), "SIGTERM"),
            (SignalKind::interrupt(), "SIGINT"),
            (SignalKind::quit(), "SIGQUIT"),
        ] {
            let mut stream = signal(kind)?;
            let shutdown = shutdown.clone();
            let latch = latch.clone();
            tasks.push(tokio::spawn(async move {
                if stream.recv().await.is_some() {
                    tracing::info!(signal = name, "Received shutdown signal");
                    shutdown.request_shutdown();
                    latch.wait().await;
                }
            }));
        }
        Ok(Self { tasks })
    }

    /// Best-effort installation for non-unix targets: Ctrl+C only.
    #[cfg(not(unix))]
    pub fn install(shutdown: ShutdownSignal, latch: CompletionLatch) -> io::Result<Self> {
        let mut ctrl_c = tokio::signal::windows::ctrl_c()?;
        let task = tokio::spawn(async move {
            if ctrl_c.recv().await.is_some() {
                tracing::info!(signal = "CTRL_C", "Received shutdown signal");
                shutdown.request_shutdown();
                latch.wait().await;
            }
        });
        Ok(Self { tasks: vec![task] })
    }

    /// Tear down the listener tasks.
    ///
    /// Listeners that already observed a signal have been released through
    /// the latch by now; the rest are still parked on their signal stream
    /// and are aborted.
    pub fn unwire(self) {
        for task in self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_install_and_unwire() {
        let listeners = SignalListeners::install(ShutdownSignal::new(), CompletionLatch::new())
            .expect("signal registration should succeed");
        listeners.unwire();
    }
}
