//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Triggers (signals.rs, caller token, service self-stop):
//!     SIGTERM/SIGINT/SIGQUIT → ShutdownSignal (first one wins)
//!
//! Controller (controller.rs):
//!     start service → callback → wait on merged signal
//!     → stop with deadline (stopper.rs) → release CompletionLatch
//!
//! Latch (shutdown.rs):
//!     signal listeners block until the stop sequence has completed
//! ```
//!
//! # Design Decisions
//! - Exactly one stop sequence per run, no matter how many triggers race
//! - Triggers are sticky: one that fires during startup is honored after
//!   start resolves
//! - Stop is bounded: after the deadline, remaining work is abandoned

pub mod controller;
pub mod error;
pub mod service;
pub mod shutdown;
pub mod signals;
pub mod stopper;

pub use controller::LifecycleController;
pub use error::{BoxError, RunError};
pub use service::Service;
pub use shutdown::{CompletionLatch, ShutdownSignal};
pub use stopper::stop_with_deadline;
