//! Resolved endpoint value type.

use std::fmt;

/// A remote endpoint produced by resolution.
///
/// The wrapped string is guaranteed non-empty with no surrounding
/// whitespace. Construction is the only place that enforces this, so
/// every consumer can treat the value as usable as-is.
///
/// # Example
///
/// ```
/// use launchgate::endpoint::Endpoint;
///
/// let endpoint = Endpoint::new("https://example.com/app").unwrap();
/// assert_eq!(endpoint.as_str(), "https://example.com/app");
///
/// assert!(Endpoint::new("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint(String);

impl Endpoint {
    /// Create an endpoint from a raw string, trimming surrounding
    /// whitespace. Returns `None` when nothing remains after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The endpoint as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.0
    }
}
