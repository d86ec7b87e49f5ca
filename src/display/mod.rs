//! Display formatting for terminal output
//!
//! Provides tables and small text helpers for the dashboard and the CLI
//! report commands.

pub mod report;

pub use report::{bucket_table, category_table, format_dashboard, statistics_lines};
