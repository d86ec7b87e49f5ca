//! Read-only snapshot of the expense store
//!
//! The store document is either the browser-storage layout
//! `{"expenses": [...], "savings": {...}}` or the bare array the remote API
//! returns. Savings balances are not part of reporting and are ignored.

use std::path::Path;

use serde::Deserialize;

use super::file_io::read_json;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoreDocument {
    Document {
        #[serde(default)]
        expenses: Vec<Expense>,
    },
    List(Vec<Expense>),
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// An immutable copy of the expense collection, in store order
#[derive(Debug, Clone, Default)]
pub struct ExpenseSnapshot {
    expenses: Vec<Expense>,
}

impl ExpenseSnapshot {
    /// Load the store document at `path`; a missing file is an empty store
    pub fn load<P: AsRef<Path>>(path: P) -> ExpenseResult<Self> {
        let path = path.as_ref();
        let document: StoreDocument = read_json(path)?;
        let expenses = match document {
            StoreDocument::Document { expenses } => expenses,
            StoreDocument::List(expenses) => expenses,
        };

        for (index, expense) in expenses.iter().enumerate() {
            expense.validate().map_err(|e| {
                ExpenseError::Validation(format!(
                    "{} (record {} in {})",
                    e,
                    index + 1,
                    path.display()
                ))
            })?;
        }

        if Money::checked_magnitude_sum(expenses.iter().map(|e| &e.amount)).is_none() {
            return Err(ExpenseError::Validation(format!(
                "expense amounts in {} add up past the supported range",
                path.display()
            )));
        }

        tracing::debug!(count = expenses.len(), path = %path.display(), "loaded expense snapshot");
        Ok(Self { expenses })
    }

    /// The expenses in store order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
