//! Storage layer for seapay
//!
//! JSON file storage with atomic writes for the two persisted records:
//! the shared pay configuration and the budget ledger.

pub mod file_io;
pub mod ledger;
pub mod pay_config;

pub use file_io::{read_json, read_json_lenient, write_json_atomic};
pub use ledger::{LedgerData, LedgerRepository};
pub use pay_config::{FilePayConfigStore, MemoryPayConfigStore, PayConfigStore};

use crate::config::paths::SeapayPaths;
use crate::error::SeapayError;

/// Main storage coordinator that provides access to both records
pub struct Storage {
    paths: SeapayPaths,
    pub pay_config: FilePayConfigStore,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SeapayPaths) -> Result<Self, SeapayError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            pay_config: FilePayConfigStore::new(paths.pay_configuration_file()),
            ledger: LedgerRepository::new(paths.budget_ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SeapayPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeapayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.pay_config.path(),
            &temp_dir.path().join("data").join("pay-configuration.json")
        );
    }
}
