//! Bootstrap controller daemon.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::connectivity::ConnectivityHandle;
use crate::resolver::{EndpointResolver, HttpFetch, ResolutionOutcome};
use crate::store::EndpointStore;

use super::mode::{decide, BootstrapMode};

/// Default minimum splash duration (milliseconds).
pub const DEFAULT_MIN_SPLASH_MS: u64 = 2000;

/// Capacity of the endpoint update channel. Updates are edge triggers;
/// one queued event is enough and extras are dropped.
const UPDATE_CHANNEL_CAPACITY: usize = 16;

/// Configuration for the bootstrap controller.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Minimum time the initial decision is withheld, keeping the
    /// splash up even when resolution finishes instantly.
    pub min_splash: Duration,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            min_splash: Duration::from_millis(DEFAULT_MIN_SPLASH_MS),
        }
    }
}

impl From<&crate::config::BootstrapSettings> for BootstrapConfig {
    fn from(settings: &crate::config::BootstrapSettings) -> Self {
        Self {
            min_splash: Duration::from_millis(settings.min_splash_ms),
        }
    }
}

/// Sender half of the endpoint update channel.
///
/// Anything that changes the store behind the controller's back (a
/// later resolution pass, an explicit cache clear) calls
/// [`notify`](Self::notify) so the controller re-reads the store and
/// recomputes the mode.
#[derive(Debug, Clone)]
pub struct EndpointUpdates {
    update_tx: mpsc::Sender<()>,
}

impl EndpointUpdates {
    /// Signal that the stored endpoint may have changed.
    ///
    /// Returns false once the controller is gone.
    pub fn notify(&self) -> bool {
        match self.update_tx.try_send(()) {
            Ok(()) => true,
            // A pending event already covers this change.
            Err(mpsc::error::TrySendError::Full(())) => true,
            Err(mpsc::error::TrySendError::Closed(())) => false,
        }
    }
}

/// Drives startup arbitration.
///
/// On start the controller resolves the endpoint while the minimum
/// splash interval runs, publishes the initial [`BootstrapMode`] once
/// both have finished, then keeps the mode current across connectivity
/// transitions and endpoint updates. Neither of those later events
/// triggers a new resolution; they only re-run the arbitration rule.
pub struct BootstrapController<F: HttpFetch> {
    resolver: Arc<EndpointResolver<F>>,
    store: Arc<dyn EndpointStore>,
    connectivity: ConnectivityHandle,
    update_rx: mpsc::Receiver<()>,
    config: BootstrapConfig,
}

impl<F: HttpFetch + 'static> BootstrapController<F> {
    /// Create a controller and the update channel feeding it.
    pub fn new(
        resolver: Arc<EndpointResolver<F>>,
        store: Arc<dyn EndpointStore>,
        connectivity: ConnectivityHandle,
        config: BootstrapConfig,
    ) -> (Self, EndpointUpdates) {
        let (update_tx, update_rx) = mpsc::channel(UPDATE_CHANNEL_CAPACITY);
        (
            Self {
                resolver,
                store,
                connectivity,
                update_rx,
                config,
            },
            EndpointUpdates { update_tx },
        )
    }

    /// Spawn the controller onto the runtime.
    pub fn start(self, shutdown: CancellationToken) -> BootstrapHandle {
        let (mode_tx, mode_rx) = watch::channel(BootstrapMode::Initializing);
        let task = tokio::spawn(async move {
            self.run(mode_tx, shutdown).await;
        });
        BootstrapHandle { mode_rx, task }
    }

    async fn run(mut self, mode_tx: watch::Sender<BootstrapMode>, shutdown: CancellationToken) {
        info!(
            min_splash_ms = self.config.min_splash.as_millis() as u64,
            "Bootstrap controller started"
        );

        // Subscribe before deciding so transitions during resolution
        // are not lost.
        let mut status_rx = self.connectivity.subscribe();

        let started = Instant::now();
        let min_splash = self.config.min_splash;
        let resolver = Arc::clone(&self.resolver);
        let mut outcome = tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                info!("Bootstrap controller cancelled during startup");
                return;
            }

            result = async {
                tokio::join!(resolver.resolve(), tokio::time::sleep(min_splash))
            } => result.0,
        };

        let online = *status_rx.borrow_and_update();
        let mut mode = decide(&outcome, online);
        info!(
            mode = mode.as_str(),
            online,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Initial bootstrap decision"
        );
        let _ = mode_tx.send(mode.clone());

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Bootstrap controller shutting down");
                    break;
                }

                changed = status_rx.changed() => {
                    match changed {
                        Ok(()) => {
                            let online = *status_rx.borrow_and_update();
                            debug!(online, "Connectivity transition received");
                            Self::apply(&mut mode, &outcome, online, &mode_tx);
                        }
                        Err(_) => {
                            debug!("Connectivity channel closed, stopping");
                            break;
                        }
                    }
                }

                Some(()) = self.update_rx.recv() => {
                    outcome = match self.store.load() {
                        Some(endpoint) => ResolutionOutcome::Resolved(endpoint),
                        None => ResolutionOutcome::Unavailable,
                    };
                    debug!(resolved = outcome.is_resolved(), "Endpoint update received");
                    let online = *status_rx.borrow_and_update();
                    Self::apply(&mut mode, &outcome, online, &mode_tx);
                }
            }
        }

        info!("Bootstrap controller stopped");
    }

    /// Re-run arbitration and publish the mode if it changed.
    fn apply(
        mode: &mut BootstrapMode,
        outcome: &ResolutionOutcome,
        online: bool,
        mode_tx: &watch::Sender<BootstrapMode>,
    ) {
        let next = decide(outcome, online);
        if next != *mode {
            info!(
                from = mode.as_str(),
                to = next.as_str(),
                "Bootstrap mode changed"
            );
            *mode = next;
            let _ = mode_tx.send(mode.clone());
        } else {
            debug!(mode = mode.as_str(), "Bootstrap mode unchanged");
        }
    }
}

/// Observer handle for a running controller.
pub struct BootstrapHandle {
    mode_rx: watch::Receiver<BootstrapMode>,
    task: JoinHandle<()>,
}

impl BootstrapHandle {
    /// Current bootstrap mode.
    pub fn mode(&self) -> BootstrapMode {
        self.mode_rx.borrow().clone()
    }

    /// Subscribe to mode changes.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapMode> {
        self.mode_rx.clone()
    }

    /// Wait for the controller task to finish.
    pub async fn join(self) {
        let _ = self.task.await;
    }
}
