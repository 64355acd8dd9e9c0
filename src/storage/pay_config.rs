//! Pay configuration persistence
//!
//! The configuration is shared state between the pay view and the budget
//! view, so access goes through the `PayConfigStore` trait rather than a
//! concrete type: the file-backed store is used in production and an
//! in-memory fake stands in for it in tests.
//!
//! Change awareness across views is best-effort: a store exposes a cheap
//! `revision` fingerprint (file mtime, or a counter for the in-memory
//! store) that a consumer can compare to decide whether to reload. There
//! is no locking or merging; the last write wins.

use std::path::PathBuf;
use std::sync::RwLock;
use std::time::UNIX_EPOCH;

use crate::error::{SeapayError, SeapayResult};
use crate::models::PayConfiguration;

use super::file_io::{read_json_lenient, write_json_atomic};

/// Storage seam for the shared pay configuration
pub trait PayConfigStore {
    /// Load the configuration, merging a partial or missing record over
    /// defaults; corrupt state reads as defaults
    fn load(&self) -> SeapayResult<PayConfiguration>;

    /// Persist the full configuration
    fn save(&self, config: &PayConfiguration) -> SeapayResult<()>;

    /// Cheap change fingerprint; differs after a save from any view
    fn revision(&self) -> u64;
}

/// File-backed configuration store (record `pay-configuration`)
#[derive(Debug)]
pub struct FilePayConfigStore {
    path: PathBuf,
}

impl FilePayConfigStore {
    /// Create a store over the given record path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The record path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PayConfigStore for FilePayConfigStore {
    fn load(&self) -> SeapayResult<PayConfiguration> {
        Ok(read_json_lenient(&self.path))
    }

    fn save(&self, config: &PayConfiguration) -> SeapayResult<()> {
        write_json_atomic(&self.path, config)
    }

    fn revision(&self) -> u64 {
        // Mtime in nanoseconds; 0 when the record doesn't exist yet
        std::fs::metadata(&self.path)
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// In-memory configuration store for tests
#[derive(Debug, Default)]
pub struct MemoryPayConfigStore {
    inner: RwLock<(PayConfiguration, u64)>,
}

impl MemoryPayConfigStore {
    /// Create a store holding the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a configuration
    pub fn with_config(config: PayConfiguration) -> Self {
        Self {
            inner: RwLock::new((config, 1)),
        }
    }
}

impl PayConfigStore for MemoryPayConfigStore {
    fn load(&self) -> SeapayResult<PayConfiguration> {
        self.inner
            .read()
            .map(|guard| guard.0.clone())
            .map_err(|e| SeapayError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn save(&self, config: &PayConfiguration) -> SeapayResult<()> {
        let mut guard = self
            .inner
            .write()
            .map_err(|e| SeapayError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        guard.0 = config.clone();
        guard.1 += 1;
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.inner.read().map(|guard| guard.1).unwrap_or(0)
    }
}
