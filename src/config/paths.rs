//! Path management for family-expense
//!
//! Resolves where settings, the expense store snapshot and generated
//! reports live.
//!
//! ## Path Resolution Order
//!
//! 1. `FAMILY_EXPENSE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`:
//!    - Linux: `$XDG_CONFIG_HOME/family-expense` or `~/.config/family-expense`
//!    - macOS: `~/Library/Application Support/family-expense`
//!    - Windows: `%APPDATA%\family-expense\config`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ExpenseError;

const APPLICATION: &str = "family-expense";

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FAMILY_EXPENSE_DATA_DIR";

/// Manages all paths used by family-expense
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for all family-expense data
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the home directory cannot
    /// be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpensePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/family-expense/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the expense store document (`expenses` + `savings`)
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("data.json")
    }

    /// Get the directory generated reports are written to by default
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Ensure the base and reports directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.reports_dir())
            .map_err(|e| ExpenseError::Io(format!("Failed to create reports directory: {}", e)))?;

        Ok(())
    }
}

/// The platform's per-user config directory for this application
fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ExpenseError::Config("Could not determine a home directory".into()))
}
