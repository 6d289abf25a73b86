//! Resolver types and protocol constants.

use std::fmt;

use crate::endpoint::Endpoint;

/// Default resolution server URL.
pub const DEFAULT_BASE_URL: &str = "https://wallen-eatery.space/ios-olg-1/server.php";

/// Default partner token sent as the `p` query parameter.
pub const DEFAULT_PARTNER_TOKEN: &str = "Bs2675kDjkb5Ga";

/// Default marker preceding the endpoint in a response body.
pub const DEFAULT_PAYLOAD_MARKER: &str = "GJDFHDFHFDJGSDAGKGHK";

/// Default separator terminating the endpoint in a response body.
pub const DEFAULT_PAYLOAD_SEPARATOR: char = '#';

/// Errors raised while resolving the endpoint.
///
/// Network and protocol failures are transient and worth retrying. An
/// extraction failure means the server answered but the body carried no
/// endpoint; the same request would fail the same way, so the attempt
/// loop gives up immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Transport failure before a response arrived.
    Network(String),
    /// Response arrived but violated the protocol (bad status, bad bytes).
    Protocol(String),
    /// Response body carried no usable endpoint.
    Extraction(String),
}

impl ResolveError {
    /// Whether another attempt against the same server could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ResolveError::Extraction(_))
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Network(msg) => write!(f, "Network error: {}", msg),
            ResolveError::Protocol(msg) => write!(f, "Protocol error: {}", msg),
            ResolveError::Extraction(msg) => write!(f, "Extraction error: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Final outcome of a resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// A usable endpoint was produced, from the store or the network.
    Resolved(Endpoint),
    /// No endpoint could be produced; callers fall back to the
    /// built-in experience.
    Unavailable,
}

impl ResolutionOutcome {
    /// The resolved endpoint, if any.
    pub fn endpoint(&self) -> Option<&Endpoint> {
        match self {
            ResolutionOutcome::Resolved(endpoint) => Some(endpoint),
            ResolutionOutcome::Unavailable => None,
        }
    }

    /// Whether an endpoint was produced.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionOutcome::Resolved(_))
    }
}

/// Configuration for the endpoint resolver protocol.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Resolution server URL.
    pub base_url: String,
    /// Partner token identifying this application.
    pub partner_token: String,
    /// Marker preceding the endpoint in the response body.
    pub payload_marker: String,
    /// Separator terminating the endpoint in the response body.
    pub payload_separator: char,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            partner_token: DEFAULT_PARTNER_TOKEN.to_string(),
            payload_marker: DEFAULT_PAYLOAD_MARKER.to_string(),
            payload_separator: DEFAULT_PAYLOAD_SEPARATOR,
        }
    }
}

impl From<&crate::config::ResolverSettings> for ResolverConfig {
    fn from(settings: &crate::config::ResolverSettings) -> Self {
        Self {
            base_url: settings.base_url.clone(),
            partner_token: settings.partner_token.clone(),
            payload_marker: settings.payload_marker.clone(),
            payload_separator: settings.payload_separator,
        }
    }
}
