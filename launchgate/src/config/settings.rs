//! Configuration settings structures.

use std::path::PathBuf;

/// Root configuration, one field per INI section.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub resolver: ResolverSettings,
    pub store: StoreSettings,
    pub connectivity: ConnectivitySettings,
    pub bootstrap: BootstrapSettings,
    pub logging: LoggingSettings,
}

/// `[resolver]` section: the resolution protocol and retry schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    /// Resolution server URL.
    pub base_url: String,
    /// Partner token sent as the `p` query parameter.
    pub partner_token: String,
    /// Marker preceding the endpoint in response bodies.
    pub payload_marker: String,
    /// Separator terminating the endpoint in response bodies.
    pub payload_separator: char,
    /// Per-attempt timeout in seconds.
    pub attempt_timeout_secs: u64,
    /// Attempts per resolution pass.
    pub max_attempts: u32,
    /// Delay between attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            base_url: crate::resolver::DEFAULT_BASE_URL.to_string(),
            partner_token: crate::resolver::DEFAULT_PARTNER_TOKEN.to_string(),
            payload_marker: crate::resolver::DEFAULT_PAYLOAD_MARKER.to_string(),
            payload_separator: crate::resolver::DEFAULT_PAYLOAD_SEPARATOR,
            attempt_timeout_secs: super::defaults::DEFAULT_ATTEMPT_TIMEOUT_SECS,
            max_attempts: super::defaults::DEFAULT_MAX_ATTEMPTS,
            retry_delay_ms: super::defaults::DEFAULT_RETRY_DELAY_MS,
        }
    }
}

/// `[store]` section: where the resolved endpoint persists.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Directory holding the persisted endpoint.
    pub directory: PathBuf,
}

/// `[connectivity]` section: reachability monitoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivitySettings {
    /// Socket addresses probed for reachability.
    pub probe_targets: Vec<String>,
    /// Timeout per probe connection in milliseconds.
    pub probe_timeout_ms: u64,
    /// Seconds between reachability polls.
    pub poll_interval_secs: u64,
}

impl Default for ConnectivitySettings {
    fn default() -> Self {
        Self {
            probe_targets: crate::connectivity::DEFAULT_PROBE_TARGETS
                .iter()
                .map(|target| target.to_string())
                .collect(),
            probe_timeout_ms: crate::connectivity::DEFAULT_PROBE_TIMEOUT_MS,
            poll_interval_secs: crate::connectivity::DEFAULT_POLL_INTERVAL_SECS,
        }
    }
}

/// `[bootstrap]` section: startup arbitration timing.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapSettings {
    /// Minimum splash duration in milliseconds.
    pub min_splash_ms: u64,
}

impl Default for BootstrapSettings {
    fn default() -> Self {
        Self {
            min_splash_ms: crate::bootstrap::DEFAULT_MIN_SPLASH_MS,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path.
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolver_settings_default_protocol() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.base_url, crate::resolver::DEFAULT_BASE_URL);
        assert_eq!(settings.partner_token, crate::resolver::DEFAULT_PARTNER_TOKEN);
        assert_eq!(settings.attempt_timeout_secs, 15);
        assert_eq!(settings.max_attempts, 3);
        assert_eq!(settings.retry_delay_ms, 1000);
    }

    #[test]
    fn test_connectivity_settings_default() {
        let settings = ConnectivitySettings::default();
        assert!(!settings.probe_targets.is_empty());
        assert_eq!(settings.poll_interval_secs, 5);
    }

    #[test]
    fn test_bootstrap_settings_default() {
        assert_eq!(BootstrapSettings::default().min_splash_ms, 2000);
    }
}
