//! Contract between the controller and the hosted service.

use std::future::Future;
use std::time::Duration;

/// A long-running unit of work hosted by a
/// [`LifecycleController`](crate::lifecycle::LifecycleController).
///
/// The controller owns the service for the duration of a run and drives it
/// through start, wait and stop. Implementations decide what "work" means;
/// the controller only relies on this contract.
pub trait Service {
    /// Error produced when the service fails to start or stop.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Start the service. Called exactly once per controller run.
    fn start(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Stop the service, making a best effort to finish remaining work
    /// before `deadline` and to forcibly terminate whatever is left at it.
    ///
    /// Must be idempotent; a second call is a no-op.
    fn stop(&mut self, deadline: Duration) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Resolves when the service itself decides to stop, independent of any
    /// external trigger.
    ///
    /// Services that never self-terminate return a future that never
    /// resolves.
    fn stop_requested(&mut self) -> impl Future<Output = ()> + Send;

    /// Addresses the service is listening on, for status output.
    fn bound_addresses(&self) -> Vec<String> {
        Vec::new()
    }
}
