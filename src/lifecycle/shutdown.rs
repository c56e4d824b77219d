//! Shutdown coordination primitives.
//!
//! # Responsibilities
//! - Collapse any number of racing shutdown triggers into one sticky event
//! - Let late subscribers observe an already-fired event
//! - Gate process teardown until the stop sequence has fully completed
//!
//! # Design Decisions
//! - Built on `CancellationToken`: fire-once, multi-waiter, linkable
//! - First trigger wins via a single atomic swap; later triggers are no-ops
//! - The latch is released exactly once, by the controller, after stop

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::CancellationToken;

/// Single-fire shutdown event shared by every trigger source.
///
/// Cloning produces another handle to the same event. The first
/// [`request_shutdown`](Self::request_shutdown) call fires the event; every
/// later call returns immediately, and waiters that subscribe after the fact
/// observe it as already fired.
#[derive(Clone)]
pub struct ShutdownSignal {
    token: CancellationToken,
    fired: Arc<AtomicBool>,
}

impl ShutdownSignal {
    /// Create a standalone shutdown signal.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            fired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Derive a signal that also fires when `external` is cancelled.
    ///
    /// The caller keeps ownership of `external`. Cancelling it fires this
    /// signal; firing this signal leaves `external` untouched.
    pub fn linked_to(external: &CancellationToken) -> Self {
        Self {
            token: external.child_token(),
            fired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request shutdown.
    ///
    /// Safe to call concurrently from any number of triggers; only the first
    /// call has an effect.
    pub fn request_shutdown(&self) {
        if !self.fired.swap(true, Ordering::SeqCst) {
            self.token.cancel();
        }
    }

    /// Wait until shutdown has been requested.
    ///
    /// Resolves immediately if the signal already fired.
    pub async fn requested(&self) {
        self.token.cancelled().await;
    }

    /// Non-blocking check whether shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot gate that holds signal listeners open until the stop sequence
/// has fully completed.
///
/// A listener that observed a trigger waits here, so nothing that joins on
/// the listener can proceed while the service is still stopping.
#[derive(Clone, Default)]
pub struct CompletionLatch {
    gate: CancellationToken,
}

impl CompletionLatch {
    /// Create a closed latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate, releasing all current and future waiters. Idempotent.
    pub fn release(&self) {
        self.gate.cancel();
    }

    /// Wait until the gate is released.
    ///
    /// Resolves immediately if the latch is already open.
    pub async fn wait(&self) {
        self.gate.cancelled().await;
    }

    /// Non-blocking check whether the latch has been released.
    pub fn is_released(&self) -> bool {
        self.gate.is_cancelled()
    }
}
