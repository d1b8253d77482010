//! Single-file YAML persistence for the ticket store
//!
//! The whole collection lives in one YAML file. Every save rewrites the
//! file in full; there is no incremental append path and no file locking.
//! This assumes single-writer, single-process usage.

use crate::core::Store;
use crate::error::{DeskTicketError, Result};
use crate::storage::StoreRepository;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store repository
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a repository backed by the given file path
    ///
    /// The file does not need to exist; [`StoreRepository::load`] treats a
    /// missing file as an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreRepository for FileStore {
    fn load(&self) -> Result<Store> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "store file absent, starting empty");
            return Ok(Store::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let store: Store = serde_yaml::from_str(&content)
            .map_err(|e| DeskTicketError::ParseError(e.to_string()))?;
        tracing::debug!(path = %self.path.display(), tickets = store.len(), "loaded store");
        Ok(store)
    }

    /// Rewrites the backing file in full.
    ///
    /// Known limitation: the write is not atomic. A crash mid-write can
    /// leave a truncated file behind.
    fn save(&self, store: &Store) -> Result<()> {
        let content = serde_yaml::to_string(store)
            .map_err(|e| DeskTicketError::SerializationError(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), tickets = store.len(), "saved store");
        Ok(())
    }
}
