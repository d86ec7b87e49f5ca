//! Export module for family-expense
//!
//! - CSV: the rows of a monthly statement (spreadsheet-compatible)

pub mod csv;

pub use self::csv::{export_statement_csv, statement_csv_bytes};
