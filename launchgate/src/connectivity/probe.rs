//! Reachability probing.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpStream;
use tracing::trace;

use super::config::ConnectivityConfig;

/// A check that decides whether the network is reachable right now.
///
/// The monitor polls this; tests swap in scripted implementations.
pub trait ReachabilityProbe: Send + Sync {
    /// Returns true when the network is considered reachable.
    fn check(&self) -> impl Future<Output = bool> + Send;
}

/// Probe that attempts short TCP connections to well-known targets.
///
/// The network counts as reachable as soon as one target accepts a
/// connection. Targets are tried in order, each bounded by the probe
/// timeout, so a fully offline machine answers within
/// `targets.len() * timeout`.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    targets: Vec<String>,
    timeout: Duration,
}

impl TcpProbe {
    /// Create a probe over the given socket addresses.
    pub fn new(targets: Vec<String>, timeout: Duration) -> Self {
        Self { targets, timeout }
    }

    /// Create a probe from monitor configuration.
    pub fn from_config(config: &ConnectivityConfig) -> Self {
        Self::new(config.probe_targets.clone(), config.probe_timeout)
    }
}

impl ReachabilityProbe for TcpProbe {
    async fn check(&self) -> bool {
        for target in &self.targets {
            match tokio::time::timeout(self.timeout, TcpStream::connect(target.as_str())).await {
                Ok(Ok(_stream)) => {
                    trace!(target = %target, "Reachability probe connected");
                    return true;
                }
                Ok(Err(e)) => {
                    trace!(target = %target, error = %e, "Reachability probe failed");
                }
                Err(_) => {
                    trace!(
                        target = %target,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Reachability probe timed out"
                    );
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_reaches_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = TcpProbe::new(vec![addr.to_string()], Duration::from_secs(1));
        assert!(probe.check().await);
    }

    #[tokio::test]
    async fn test_probe_fails_on_closed_port() {
        // Bind then drop to get a port nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = TcpProbe::new(vec![addr.to_string()], Duration::from_secs(1));
        assert!(!probe.check().await);
    }

    #[tokio::test]
    async fn test_probe_falls_through_to_second_target() {
        let dead = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead_addr = dead.local_addr().unwrap();
        drop(dead);

        let live = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let live_addr = live.local_addr().unwrap();

        let probe = TcpProbe::new(
            vec![dead_addr.to_string(), live_addr.to_string()],
            Duration::from_secs(1),
        );
        assert!(probe.check().await);
    }

    #[tokio::test]
    async fn test_probe_with_no_targets_is_offline() {
        let probe = TcpProbe::new(Vec::new(), Duration::from_secs(1));
        assert!(!probe.check().await);
    }
}
