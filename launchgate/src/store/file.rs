//! Disk-backed endpoint store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::endpoint::Endpoint;

use super::traits::EndpointStore;
use super::types::StoreError;

/// File name for the persisted endpoint.
const ENDPOINT_FILE: &str = "endpoint";

/// Staging file name used to make writes atomic.
const ENDPOINT_TMP_FILE: &str = "endpoint.tmp";

/// Endpoint store persisting to a single file on disk.
///
/// Writes go through a temporary file and a rename so a crash mid-write
/// never leaves a truncated endpoint behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Path of the endpoint file.
    pub fn endpoint_path(&self) -> PathBuf {
        self.directory.join(ENDPOINT_FILE)
    }
}

impl EndpointStore for FileStore {
    fn load(&self) -> Option<Endpoint> {
        let path = self.endpoint_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read stored endpoint");
                return None;
            }
        };

        match Endpoint::new(&raw) {
            Some(endpoint) => Some(endpoint),
            None => {
                warn!(path = %path.display(), "Stored endpoint file is empty, ignoring");
                None
            }
        }
    }

    fn store(&self, endpoint: &Endpoint) -> Result<(), StoreError> {
        fs::create_dir_all(&self.directory)?;

        let staging = self.directory.join(ENDPOINT_TMP_FILE);
        fs::write(&staging, endpoint.as_str())?;
        fs::rename(&staging, self.endpoint_path())?;

        debug!(endpoint = %endpoint, path = %self.endpoint_path().display(), "Endpoint persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.endpoint_path()) {
            Ok(()) => {
                debug!(path = %self.endpoint_path().display(), "Stored endpoint removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (FileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        (FileStore::new(dir.path()), dir)
    }

    #[test]
    fn test_load_missing_returns_none() {
        let (store, _dir) = test_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let (store, _dir) = test_store();
        let endpoint = Endpoint::new("https://example.com/app").unwrap();

        store.store(&endpoint).unwrap();
        assert_eq!(store.load(), Some(endpoint));
    }

    #[test]
    fn test_store_replaces_previous_value() {
        let (store, _dir) = test_store();
        let first = Endpoint::new("https://one.example.com").unwrap();
        let second = Endpoint::new("https://two.example.com").unwrap();

        store.store(&first).unwrap();
        store.store(&second).unwrap();
        assert_eq!(store.load(), Some(second));
    }

    #[test]
    fn test_store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("nested");
        let store = FileStore::new(&nested);
        let endpoint = Endpoint::new("https://example.com").unwrap();

        store.store(&endpoint).unwrap();
        assert_eq!(store.load(), Some(endpoint));
    }

    #[test]
    fn test_clear_removes_endpoint() {
        let (store, _dir) = test_store();
        let endpoint = Endpoint::new("https://example.com").unwrap();

        store.store(&endpoint).unwrap();
        store.clear().unwrap();
        assert!(store.load().is_none());
        assert!(!store.endpoint_path().exists());
    }

    #[test]
    fn test_clear_on_empty_store_succeeds() {
        let (store, _dir) = test_store();
        assert!(store.clear().is_ok());
    }

    #[test]
    fn test_load_ignores_whitespace_only_file() {
        let (store, dir) = test_store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(store.endpoint_path(), "   \n").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_load_trims_trailing_newline() {
        let (store, dir) = test_store();
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(store.endpoint_path(), "https://example.com\n").unwrap();
        assert_eq!(store.load(), Endpoint::new("https://example.com"));
    }

    #[test]
    fn test_no_staging_file_left_behind() {
        let (store, dir) = test_store();
        let endpoint = Endpoint::new("https://example.com").unwrap();

        store.store(&endpoint).unwrap();
        assert!(!dir.path().join(ENDPOINT_TMP_FILE).exists());
    }
}
