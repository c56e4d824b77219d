//! Observability subsystem: structured logging for the host.

pub mod logging;

pub use logging::init_logging;
