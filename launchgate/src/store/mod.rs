//! Persistence for the resolved endpoint.
//!
//! The store keeps exactly one endpoint between launches. [`FileStore`]
//! persists it under the configuration directory; [`MemoryStore`] backs
//! embedders and tests that want no disk at all. Components depend on
//! the [`EndpointStore`] trait so either can be swapped in.

mod file;
mod memory;
mod traits;
mod types;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::EndpointStore;
pub use types::StoreError;
