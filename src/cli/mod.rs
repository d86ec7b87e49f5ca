//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the report engine.

pub mod report;

pub use report::{
    handle_categories_command, handle_config_command, handle_report_command,
    handle_summary_command, handle_trend_command, ReportFormat, TrendGranularity,
};

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::ReportOptions;
use crate::storage::ExpenseSnapshot;

/// Everything a command needs, resolved once at startup
#[derive(Debug)]
pub struct CliContext {
    pub paths: ExpensePaths,
    pub settings: Settings,
    pub options: ReportOptions,
    /// Store document the snapshot was read from
    pub data_file: PathBuf,
    pub snapshot: ExpenseSnapshot,
    /// Reference instant for trailing windows
    pub now: DateTime<Utc>,
}

impl CliContext {
    /// Resolve paths and settings, then load the snapshot
    ///
    /// `data` overrides the store location; `now` overrides the clock with a
    /// `YYYY-MM-DD` date (midnight UTC).
    pub fn load(
        paths: ExpensePaths,
        data: Option<PathBuf>,
        now: Option<&str>,
    ) -> ExpenseResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let options = settings.report_options()?;
        let data_file = data.unwrap_or_else(|| paths.data_file());
        let snapshot = ExpenseSnapshot::load(&data_file)?;
        let now = match now {
            Some(value) => parse_now(value)?,
            None => Utc::now(),
        };

        tracing::debug!(
            data_file = %data_file.display(),
            expenses = snapshot.len(),
            %now,
            "loaded cli context"
        );

        Ok(Self {
            paths,
            settings,
            options,
            data_file,
            snapshot,
            now,
        })
    }
}

/// Parse a `YYYY-MM-DD` reference date as midnight UTC
pub fn parse_now(value: &str) -> ExpenseResult<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date: {}. Use YYYY-MM-DD (e.g., 2025-03-15)",
            value
        ))
    })?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}
