//! Shared mock services for lifecycle integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;

use service_host::HostConfig;
use service_host::lifecycle::Service;

/// Error returned by a mock configured to fail.
#[derive(Debug, Error)]
#[error("mock service failure")]
pub struct MockError;

/// Call counters observable from the test after the controller consumed
/// the service.
#[derive(Default)]
pub struct MockCounters {
    pub start_calls: AtomicUsize,
    pub stop_calls: AtomicUsize,
}

impl MockCounters {
    pub fn starts(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }
}

/// Configurable in-memory service.
pub struct MockService {
    counters: Arc<MockCounters>,
    start_delay: Duration,
    fail_start: bool,
    stop_duration: Duration,
    self_stop: Option<oneshot::Receiver<()>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(MockCounters::default()),
            start_delay: Duration::ZERO,
            fail_start: false,
            stop_duration: Duration::ZERO,
            self_stop: None,
        }
    }

    pub fn counters(&self) -> Arc<MockCounters> {
        self.counters.clone()
    }

    /// Delay `start` to widen the startup race window.
    pub fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    pub fn with_failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    /// Make `stop` take this long before confirming.
    pub fn with_stop_duration(mut self, duration: Duration) -> Self {
        self.stop_duration = duration;
        self
    }

    /// Returns a sender that makes the service request its own shutdown.
    pub fn with_self_stop(mut self) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        self.self_stop = Some(rx);
        (self, tx)
    }
}

impl Service for MockService {
    type Error = MockError;

    async fn start(&mut self) -> Result<(), MockError> {
        self.counters.start_calls.fetch_add(1, Ordering::SeqCst);
        if self.start_delay > Duration::ZERO {
            tokio::time::sleep(self.start_delay).await;
        }
        if self.fail_start {
            return Err(MockError);
        }
        Ok(())
    }

    async fn stop(&mut self, _deadline: Duration) -> Result<(), MockError> {
        self.counters.stop_calls.fetch_add(1, Ordering::SeqCst);
        if self.stop_duration > Duration::ZERO {
            tokio::time::sleep(self.stop_duration).await;
        }
        Ok(())
    }

    async fn stop_requested(&mut self) {
        match self.self_stop.take() {
            Some(rx) => {
                let _ = rx.await;
            }
            None => std::future::pending().await,
        }
    }
}

/// Config with status lines suppressed and the given stop deadline.
pub fn test_config(timeout_secs: u64) -> HostConfig {
    let mut config = HostConfig::default();
    config.shutdown.timeout_secs = timeout_secs;
    config.suppress_status_messages = true;
    config
}
