//! User settings for family-expense
//!
//! Manages report preferences: currency symbol, week start, how many trailing
//! buckets the trend statistics average over, and the recognized categories.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::{CategoryCatalog, WeekStart, DEFAULT_CATEGORIES};
use crate::reports::{ReportOptions, MAX_BUCKETS};

/// User settings for family-expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in summaries and report headers
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// First day of week (0 = Sunday, 1 = Monday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Number of trailing weeks the weekly average covers
    #[serde(default = "default_weekly_buckets")]
    pub weekly_buckets: usize,

    /// Number of trailing months the monthly average covers
    #[serde(default = "default_monthly_buckets")]
    pub monthly_buckets: usize,

    /// How many categories the breakdown legend lists
    #[serde(default = "default_legend_size")]
    pub legend_size: usize,

    /// Recognized category labels offered by the expense form
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

fn default_weekly_buckets() -> usize {
    4
}

fn default_monthly_buckets() -> usize {
    6
}

fn default_legend_size() -> usize {
    6
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            first_day_of_week: default_first_day_of_week(),
            weekly_buckets: default_weekly_buckets(),
            monthly_buckets: default_monthly_buckets(),
            legend_size: default_legend_size(),
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        self.validate()?;
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Check the values the report engine divides by or indexes with
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.week_start().is_none() {
            return Err(ExpenseError::Config(format!(
                "first_day_of_week must be 0 (Sunday) or 1 (Monday), got {}",
                self.first_day_of_week
            )));
        }
        for (name, value) in [
            ("weekly_buckets", self.weekly_buckets),
            ("monthly_buckets", self.monthly_buckets),
        ] {
            if !(1..=MAX_BUCKETS).contains(&value) {
                return Err(ExpenseError::Config(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_BUCKETS, value
                )));
            }
        }
        Ok(())
    }

    /// The configured week start convention
    pub fn week_start(&self) -> Option<WeekStart> {
        WeekStart::from_index(self.first_day_of_week)
    }

    /// The recognized category catalog
    pub fn catalog(&self) -> CategoryCatalog {
        CategoryCatalog::new(self.categories.iter().cloned())
    }

    /// Options for the report engine, after validation
    pub fn report_options(&self) -> Result<ReportOptions, ExpenseError> {
        self.validate()?;
        Ok(ReportOptions {
            currency_symbol: self.currency_symbol.clone(),
            week_start: self.week_start().unwrap_or_default(),
            weekly_buckets: self.weekly_buckets,
            monthly_buckets: self.monthly_buckets,
            legend_size: self.legend_size,
            catalog: self.catalog(),
        })
    }
}
