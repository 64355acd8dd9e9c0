//! Path management for seapay
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `SEAPAY_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/seapay-cli` or `~/.config/seapay-cli`
//! 3. Windows: `%APPDATA%\seapay-cli`

use std::path::PathBuf;

use crate::error::SeapayError;

/// Manages all paths used by seapay
#[derive(Debug, Clone)]
pub struct SeapayPaths {
    /// Base directory for all seapay data
    base_dir: PathBuf,
}

impl SeapayPaths {
    /// Create a new SeapayPaths instance
    ///
    /// Path resolution:
    /// 1. `SEAPAY_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/seapay-cli` or `~/.config/seapay-cli`
    /// 3. Windows: `%APPDATA%\seapay-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SeapayError> {
        let base_dir = if let Ok(custom) = std::env::var("SEAPAY_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SeapayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/seapay-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config directory (same as base for simplicity)
    pub fn config_dir(&self) -> PathBuf {
        self.base_dir.clone()
    }

    /// Get the data directory (~/.config/seapay-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted pay configuration record
    pub fn pay_configuration_file(&self) -> PathBuf {
        self.data_dir().join("pay-configuration.json")
    }

    /// Get the path to the persisted budget ledger record
    pub fn budget_ledger_file(&self) -> PathBuf {
        self.data_dir().join("budget-ledger.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/seapay-cli/)
    /// - Data directory (~/.config/seapay-cli/data/)
    pub fn ensure_directories(&self) -> Result<(), SeapayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SeapayError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SeapayError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if seapay has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SeapayError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SeapayError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("seapay-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SeapayError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SeapayError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("seapay-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeapayPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeapayPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeapayPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.pay_configuration_file(),
            temp_dir.path().join("data").join("pay-configuration.json")
        );
        assert_eq!(
            paths.budget_ledger_file(),
            temp_dir.path().join("data").join("budget-ledger.json")
        );
    }
}
