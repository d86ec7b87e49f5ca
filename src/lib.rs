//! family-expense - expense aggregation and report rendering
//!
//! This library turns a read-only snapshot of a household's expense
//! records into the figures a reports screen shows, and renders a
//! paginated monthly statement document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, periods)
//! - `storage`: Read-only store snapshot and atomic file writes
//! - `reports`: Trend buckets, category totals, statistics, monthly statements
//! - `render`: Document backends (PDF, plain text) for statement layouts
//! - `export`: CSV export of a monthly statement
//! - `display`: Terminal tables
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use family_expense::models::ReportMonth;
//! use family_expense::render::PdfBackend;
//! use family_expense::reports::{MonthlyStatement, PageGeometry};
//! use family_expense::storage::ExpenseSnapshot;
//!
//! let snapshot = ExpenseSnapshot::load("data.json")?;
//! let statement = MonthlyStatement::generate(snapshot.expenses(), ReportMonth::new(2025, 3)?);
//! let artifact = statement.render("₹", PageGeometry::default(), &mut PdfBackend::new())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod render;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
