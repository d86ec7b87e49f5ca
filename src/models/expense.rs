//! Expense record model
//!
//! Expenses are owned by the external store. The reporting engine only
//! borrows them, so the type carries no mutating operations.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier (creation instant in epoch milliseconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// What the money was spent on
    pub description: String,

    /// Amount spent; zero and negative values are kept as-is
    #[serde(with = "super::money::decimal")]
    pub amount: Money,

    /// Category label
    pub category: Category,

    /// When the expense happened
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,

    /// The `YYYY-MM-DD` string the expense was entered with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Expense {
    /// Create an expense dated at midnight UTC of `date`
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            amount,
            category,
            timestamp: Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)),
            date: Some(date.format("%Y-%m-%d").to_string()),
        }
    }

    /// Calendar date used for bucketing and month filtering
    pub fn calendar_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) {}",
            self.calendar_date(),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
