//! Connectivity monitor configuration.

use std::time::Duration;

/// Default probe targets.
///
/// Public DNS resolvers on ports that are almost never filtered. Two
/// independent operators so a single outage does not read as offline.
pub const DEFAULT_PROBE_TARGETS: [&str; 2] = ["1.1.1.1:443", "8.8.8.8:53"];

/// Default timeout for a single probe connection (milliseconds).
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 3000;

/// Default interval between reachability polls (seconds).
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Configuration for the connectivity monitor.
#[derive(Debug, Clone)]
pub struct ConnectivityConfig {
    /// Socket addresses probed to decide reachability.
    pub probe_targets: Vec<String>,
    /// Timeout for a single probe connection.
    pub probe_timeout: Duration,
    /// Interval between polls.
    pub poll_interval: Duration,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_targets: DEFAULT_PROBE_TARGETS
                .iter()
                .map(|target| target.to_string())
                .collect(),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

impl From<&crate::config::ConnectivitySettings> for ConnectivityConfig {
    fn from(settings: &crate::config::ConnectivitySettings) -> Self {
        Self {
            probe_targets: settings.probe_targets.clone(),
            probe_timeout: Duration::from_millis(settings.probe_timeout_ms),
            poll_interval: Duration::from_secs(settings.poll_interval_secs),
        }
    }
}
