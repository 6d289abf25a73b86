//! Endpoint store abstraction.

use crate::endpoint::Endpoint;

use super::types::StoreError;

/// Storage for the single resolved endpoint.
///
/// Implementations must be safe to share across threads; the resolver
/// and the bootstrap controller both hold the store behind an `Arc`.
///
/// # Example
///
/// ```
/// use launchgate::endpoint::Endpoint;
/// use launchgate::store::{EndpointStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// assert!(store.load().is_none());
///
/// let endpoint = Endpoint::new("https://example.com").unwrap();
/// store.store(&endpoint).unwrap();
/// assert_eq!(store.load(), Some(endpoint));
/// ```
pub trait EndpointStore: Send + Sync {
    /// Load the stored endpoint, if any.
    ///
    /// Read failures degrade to `None`; a broken store must never keep
    /// the application from starting.
    fn load(&self) -> Option<Endpoint>;

    /// Persist the endpoint, replacing any previous value.
    fn store(&self, endpoint: &Endpoint) -> Result<(), StoreError>;

    /// Remove the stored endpoint. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), StoreError>;
}
