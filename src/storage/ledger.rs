//! Budget ledger persistence
//!
//! The ledger record (`budget-ledger`) carries the expense lines plus two
//! one-shot flags: `importedOnce` marks that the allotment seeding has run,
//! `migrated` that the legacy non-allotment cleanup has run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::SeapayResult;
use crate::models::Expense;

use super::file_io::{read_json_lenient, write_json_atomic};

/// The persisted budget ledger record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerData {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Expense lines in display order
    pub expenses: Vec<Expense>,

    /// Whether the one-time allotment seeding has run
    pub imported_once: bool,

    /// Whether the legacy non-allotment cleanup has run
    pub migrated: bool,
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            schema_version: 1,
            expenses: Vec::new(),
            imported_once: false,
            migrated: false,
        }
    }
}

/// Repository for the budget ledger record
#[derive(Debug)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a repository over the given record path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the ledger; missing or corrupt records read as empty
    pub fn load(&self) -> SeapayResult<LedgerData> {
        Ok(read_json_lenient(&self.path))
    }

    /// Persist the full ledger
    pub fn save(&self, data: &LedgerData) -> SeapayResult<()> {
        write_json_atomic(&self.path, data)
    }

    /// The record path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseKind;
    use tempfile::TempDir;

    fn repo() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("budget-ledger.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_missing_record_loads_empty() {
        let (_temp_dir, repo) = repo();
        let data = repo.load().unwrap();
        assert!(data.expenses.is_empty());
        assert!(!data.imported_once);
        assert!(!data.migrated);
    }

    #[test]
    fn test_round_trip() {
        let (_temp_dir, repo) = repo();

        let mut data = LedgerData::default();
        data.expenses
            .push(Expense::new("Rent", 900.0, ExpenseKind::Need, 0));
        data.imported_once = true;
        repo.save(&data).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.expenses.len(), 1);
        assert_eq!(loaded.expenses[0].name, "Rent");
        assert!(loaded.imported_once);
        assert!(!loaded.migrated);
    }

    #[test]
    fn test_corrupt_record_loads_empty() {
        let (temp_dir, repo) = repo();
        std::fs::write(temp_dir.path().join("budget-ledger.json"), "][").unwrap();

        let data = repo.load().unwrap();
        assert!(data.expenses.is_empty());
    }

    #[test]
    fn test_record_uses_camel_case_flags() {
        let (temp_dir, repo) = repo();

        let mut data = LedgerData::default();
        data.imported_once = true;
        data.migrated = true;
        repo.save(&data).unwrap();

        let raw =
            std::fs::read_to_string(temp_dir.path().join("budget-ledger.json")).unwrap();
        assert!(raw.contains("\"importedOnce\": true"));
        assert!(raw.contains("\"migrated\": true"));
    }
}
