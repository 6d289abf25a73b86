//! In-memory endpoint store.

use std::sync::Mutex;

use crate::endpoint::Endpoint;

use super::traits::EndpointStore;
use super::types::StoreError;

/// Endpoint store backed by process memory.
///
/// Nothing survives a restart. Useful for embedders that manage their
/// own persistence and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<Endpoint>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with an endpoint.
    pub fn with_endpoint(endpoint: Endpoint) -> Self {
        Self {
            inner: Mutex::new(Some(endpoint)),
        }
    }
}

impl EndpointStore for MemoryStore {
    fn load(&self) -> Option<Endpoint> {
        self.inner.lock().ok()?.clone()
    }

    fn store(&self, endpoint: &Endpoint) -> Result<(), StoreError> {
        let mut guard = self.inner.lock().map_err(|_| StoreError::LockPoisoned)?;
        *guard = Some(endpoint.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.inner.lock().map_err(|_| StoreError::LockPoisoned)?;
        *guard = None;
        Ok(())
    }
}
