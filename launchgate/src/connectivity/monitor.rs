//! Connectivity monitor daemon.

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::config::ConnectivityConfig;
use super::probe::ReachabilityProbe;

/// Background task that polls reachability and publishes transitions.
///
/// Status starts as online: at launch the network is assumed reachable
/// until a probe proves otherwise, so startup never blocks on a poll.
/// Only transitions are published; subscribers are not woken by polls
/// that confirm the current state.
pub struct ConnectivityMonitor<P: ReachabilityProbe> {
    probe: P,
    config: ConnectivityConfig,
    status_tx: watch::Sender<bool>,
}

impl<P: ReachabilityProbe + 'static> ConnectivityMonitor<P> {
    /// Create a monitor and the handle used to observe its status.
    pub fn new(probe: P, config: ConnectivityConfig) -> (Self, ConnectivityHandle) {
        let (status_tx, status_rx) = watch::channel(true);
        (
            Self {
                probe,
                config,
                status_tx,
            },
            ConnectivityHandle { status_rx },
        )
    }

    /// Spawn the monitor onto the runtime.
    pub fn start(self, shutdown: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run(shutdown).await;
        })
    }

    async fn run(self, shutdown: CancellationToken) {
        info!(
            poll_interval_secs = self.config.poll_interval.as_secs(),
            targets = ?self.config.probe_targets,
            "Connectivity monitor started"
        );

        let mut interval = tokio::time::interval(self.config.poll_interval);

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Connectivity monitor shutting down");
                    break;
                }

                _ = interval.tick() => {
                    let online = self.probe.check().await;
                    let previous = *self.status_tx.borrow();
                    if online != previous {
                        info!(online, "Connectivity changed");
                        if self.status_tx.send(online).is_err() {
                            debug!("Connectivity status channel closed, stopping");
                            break;
                        }
                    }
                }
            }
        }

        info!("Connectivity monitor stopped");
    }
}

/// Cloneable view of the monitor's current status.
#[derive(Debug, Clone)]
pub struct ConnectivityHandle {
    status_rx: watch::Receiver<bool>,
}

impl ConnectivityHandle {
    /// Current reachability status.
    pub fn is_online(&self) -> bool {
        *self.status_rx.borrow()
    }

    /// Subscribe to status transitions.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.status_rx.clone()
    }

    /// Handle driven directly by a test instead of a monitor.
    #[cfg(test)]
    pub fn manual(initial: bool) -> (watch::Sender<bool>, Self) {
        let (status_tx, status_rx) = watch::channel(initial);
        (status_tx, Self { status_rx })
    }
}
