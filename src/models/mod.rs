//! Core data models for family-expense
//!
//! This module contains the value types the reporting engine works with:
//! expense records, money amounts, category labels and calendar periods.

pub mod category;
pub mod expense;
pub mod money;
pub mod period;

pub use category::{Category, CategoryCatalog, DEFAULT_CATEGORIES};
pub use expense::Expense;
pub use money::Money;
pub use period::{Granularity, ReportMonth, WeekStart};
