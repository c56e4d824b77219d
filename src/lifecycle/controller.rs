//! Lifecycle controller: start, wait for a trigger, stop once.
//!
//! # Data Flow
//! ```text
//! run():
//!     wire signal listeners (unless a caller token was supplied)
//!     → start service (fail fast on error)
//!     → emit status lines, fire startup callback once
//!     → wait: ShutdownSignal ∪ service self-stop
//!     → graceful stop with deadline
//!     → release latch, unwire listeners
//! ```
//!
//! # Design Decisions
//! - A caller-supplied token suppresses OS listener installation entirely;
//!   the caller owns process-level signals in that mode
//! - Listeners are wired before `start` so a trigger during startup is
//!   retained by the sticky signal and honored once start resolves
//! - A failing startup callback is a virtual shutdown trigger: the service
//!   is stopped gracefully, then the error is returned

use tokio_util::sync::CancellationToken;

use crate::config::HostConfig;
use crate::lifecycle::error::{BoxError, RunError};
use crate::lifecycle::service::Service;
use crate::lifecycle::shutdown::{CompletionLatch, ShutdownSignal};
use crate::lifecycle::signals::SignalListeners;
use crate::lifecycle::stopper;

type StartupCallback = Box<dyn FnOnce() -> Result<(), BoxError> + Send>;

#[derive(Debug, Clone, Copy)]
enum State {
    NotStarted,
    Starting,
    Running,
    Stopping,
    Stopped,
    Failed,
}

/// Drives a [`Service`] through its whole lifetime.
///
/// Construct with [`new`](Self::new), optionally attach a caller-managed
/// cancellation token and a startup callback, then call
/// [`run`](Self::run). The stop sequence executes exactly once per run, no
/// matter how many triggers fire or race.
pub struct LifecycleController<S> {
    service: S,
    config: HostConfig,
    shutdown: ShutdownSignal,
    install_os_listeners: bool,
    on_started: Option<StartupCallback>,
    state: State,
}

impl<S: Service> LifecycleController<S> {
    /// Create a controller that reacts to OS termination signals.
    pub fn new(service: S, config: HostConfig) -> Self {
        Self {
            service,
            config,
            shutdown: ShutdownSignal::new(),
            install_os_listeners: true,
            on_started: None,
            state: State::NotStarted,
        }
    }

    /// Hand shutdown control to the caller.
    ///
    /// No OS listeners are installed; cancelling `token` is the only
    /// external trigger. Combine with [`shutdown_handle`](Self::shutdown_handle)
    /// for programmatic shutdown; call this before taking a handle.
    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = ShutdownSignal::linked_to(&token);
        self.install_os_listeners = false;
        self
    }

    /// Register a callback fired exactly once, after the service has
    /// confirmed startup and before the controller begins waiting for a
    /// trigger.
    pub fn on_started<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() -> Result<(), BoxError> + Send + 'static,
    {
        self.on_started = Some(Box::new(callback));
        self
    }

    /// A clonable handle that requests shutdown through the normal stop
    /// sequence, bypassing the wait for an OS or caller trigger.
    pub fn shutdown_handle(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Run the service until a shutdown trigger fires, then stop it within
    /// the configured deadline.
    pub async fn run(mut self) -> Result<(), RunError> {
        let latch = CompletionLatch::new();
        let listeners = if self.install_os_listeners {
            Some(
                SignalListeners::install(self.shutdown.clone(), latch.clone())
                    .map_err(RunError::SignalRegistration)?,
            )
        } else {
            None
        };

        self.transition(State::Starting);
        if let Err(error) = self.service.start().await {
            self.transition(State::Failed);
            if let Some(listeners) = listeners {
                listeners.unwire();
            }
            return Err(RunError::Start(Box::new(error)));
        }
        self.transition(State::Running);
        self.emit_startup_status();

        let callback_error = match self.on_started.take() {
            Some(callback) => match callback() {
                Ok(()) => None,
                Err(error) => {
                    tracing::error!(error = %error, "Startup callback failed; shutting down");
                    self.shutdown.request_shutdown();
                    Some(error)
                }
            },
            None => None,
        };

        let shutdown = self.shutdown.clone();
        tokio::select! {
            _ = shutdown.requested() => {
                tracing::info!("Shutdown requested");
            }
            _ = self.service.stop_requested() => {
                tracing::info!("Service requested its own shutdown");
            }
        }

        if !self.config.suppress_status_messages {
            tracing::info!("Application is shutting down...");
        }
        self.transition(State::Stopping);
        stopper::stop_with_deadline(&mut self.service, self.config.shutdown_timeout()).await;
        self.transition(State::Stopped);
        latch.release();
        if let Some(listeners) = listeners {
            listeners.unwire();
        }

        match callback_error {
            Some(error) => Err(RunError::StartupCallback(error)),
            None => Ok(()),
        }
    }

    fn transition(&mut self, next: State) {
        tracing::debug!(from = ?self.state, to = ?next, "Lifecycle state transition");
        self.state = next;
    }

    fn emit_startup_status(&self) {
        if self.config.suppress_status_messages {
            return;
        }
        tracing::info!(environment = %self.config.environment, "Hosting environment");
        tracing::info!(path = %self.config.content_root.display(), "Content root");
        for address in self.service.bound_addresses() {
            tracing::info!(address = %address, "Now listening");
        }
        if self.install_os_listeners {
            tracing::info!("Application started. Press Ctrl+C to shut down");
        }
    }
}
