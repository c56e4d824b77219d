//! Process-lifecycle coordinator for long-running services.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller token ──┐
//!   SIGTERM ───────┤
//!   SIGINT ────────┼──▶ ShutdownSignal ──▶ LifecycleController ──▶ stop
//!   SIGQUIT ───────┤      (first wins)      start → wait → stop    (bounded
//!   self-stop ─────┘                              │                 by
//!                                                 ▼                 deadline)
//!                                          CompletionLatch
//!                                    (listeners held until stop done)
//! ```
//!
//! The controller starts a hosted [`Service`](lifecycle::Service), waits
//! until shutdown is requested from any source, and drives an orderly,
//! bounded-time stop exactly once — regardless of which trigger fired or
//! how many of them raced.

// Core subsystem
pub mod lifecycle;

// Hosted demo service
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::HostConfig;
pub use http::HttpServer;
pub use lifecycle::{LifecycleController, RunError, Service, ShutdownSignal};
