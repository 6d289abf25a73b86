//! Bootstrap modes and the arbitration rule.

use crate::endpoint::Endpoint;
use crate::resolver::ResolutionOutcome;

/// What the application should present after startup arbitration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapMode {
    /// Arbitration has not produced a decision yet. The splash screen
    /// stays up.
    Initializing,
    /// Load the remote endpoint.
    Remote(Endpoint),
    /// A remote endpoint is known but the network is offline. Present
    /// an offline notice; flips back to remote when connectivity
    /// returns.
    RemoteOffline(Endpoint),
    /// No endpoint is available. Run the built-in experience.
    NativeFallback,
}

impl BootstrapMode {
    /// Short machine-readable name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            BootstrapMode::Initializing => "initializing",
            BootstrapMode::Remote(_) => "remote",
            BootstrapMode::RemoteOffline(_) => "remote-offline",
            BootstrapMode::NativeFallback => "native-fallback",
        }
    }

    /// The endpoint this mode presents, if any.
    pub fn endpoint(&self) -> Option<&Endpoint> {
        match self {
            BootstrapMode::Remote(endpoint) | BootstrapMode::RemoteOffline(endpoint) => {
                Some(endpoint)
            }
            BootstrapMode::Initializing | BootstrapMode::NativeFallback => None,
        }
    }
}

/// The arbitration rule.
///
/// | outcome     | online  | mode           |
/// |-------------|---------|----------------|
/// | Resolved    | true    | Remote         |
/// | Resolved    | false   | RemoteOffline  |
/// | Unavailable | any     | NativeFallback |
///
/// Connectivity only matters when an endpoint exists: without one
/// there is nothing remote to present, online or not.
pub fn decide(outcome: &ResolutionOutcome, online: bool) -> BootstrapMode {
    match (outcome, online) {
        (ResolutionOutcome::Resolved(endpoint), true) => BootstrapMode::Remote(endpoint.clone()),
        (ResolutionOutcome::Resolved(endpoint), false) => {
            BootstrapMode::RemoteOffline(endpoint.clone())
        }
        (ResolutionOutcome::Unavailable, _) => BootstrapMode::NativeFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resolved(url: &str) -> ResolutionOutcome {
        ResolutionOutcome::Resolved(Endpoint::new(url).unwrap())
    }

    #[test]
    fn test_resolved_online_is_remote() {
        let endpoint = Endpoint::new("https://example.com").unwrap();
        assert_eq!(
            decide(&resolved("https://example.com"), true),
            BootstrapMode::Remote(endpoint)
        );
    }

    #[test]
    fn test_resolved_offline_is_remote_offline() {
        let endpoint = Endpoint::new("https://example.com").unwrap();
        assert_eq!(
            decide(&resolved("https://example.com"), false),
            BootstrapMode::RemoteOffline(endpoint)
        );
    }

    #[test]
    fn test_unavailable_is_native_fallback_regardless_of_connectivity() {
        assert_eq!(
            decide(&ResolutionOutcome::Unavailable, true),
            BootstrapMode::NativeFallback
        );
        assert_eq!(
            decide(&ResolutionOutcome::Unavailable, false),
            BootstrapMode::NativeFallback
        );
    }

    #[test]
    fn test_endpoint_accessor() {
        let endpoint = Endpoint::new("https://example.com").unwrap();
        assert_eq!(
            BootstrapMode::Remote(endpoint.clone()).endpoint(),
            Some(&endpoint)
        );
        assert_eq!(
            BootstrapMode::RemoteOffline(endpoint.clone()).endpoint(),
            Some(&endpoint)
        );
        assert_eq!(BootstrapMode::Initializing.endpoint(), None);
        assert_eq!(BootstrapMode::NativeFallback.endpoint(), None);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(BootstrapMode::Initializing.as_str(), "initializing");
        assert_eq!(BootstrapMode::NativeFallback.as_str(), "native-fallback");
    }

    proptest! {
        /// Property: arbitration never yields Initializing.
        #[test]
        fn prop_decide_always_decides(url in "[a-z0-9:/._-]{1,40}", online: bool) {
            let mode = decide(&resolved(&url), online);
            prop_assert_ne!(mode, BootstrapMode::Initializing);
        }

        /// Property: a resolved endpoint survives arbitration intact.
        #[test]
        fn prop_resolved_endpoint_is_preserved(url in "[a-z0-9:/._-]{1,40}", online: bool) {
            let outcome = resolved(&url);
            let mode = decide(&outcome, online);
            prop_assert_eq!(mode.endpoint(), outcome.endpoint());
        }

        /// Property: connectivity alone never changes whether an
        /// endpoint is presented, only how.
        #[test]
        fn prop_connectivity_flips_between_remote_modes(url in "[a-z0-9:/._-]{1,40}") {
            let outcome = resolved(&url);
            let online = decide(&outcome, true);
            let offline = decide(&outcome, false);
            prop_assert!(matches!(online, BootstrapMode::Remote(_)));
            prop_assert!(matches!(offline, BootstrapMode::RemoteOffline(_)));
            prop_assert_eq!(online.endpoint(), offline.endpoint());
        }
    }
}
