//! Spending by category
//!
//! Groups the whole expense collection by category label and orders the
//! groups by total, largest first.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::money::decimal;
use crate::models::{Category, Expense, Money};

/// Total spending for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category label
    pub category: Category,
    /// Sum of amounts (negative if refunds outweigh spending)
    #[serde(serialize_with = "decimal::serialize")]
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the grand total, in percent (0.0 when the grand total is zero)
    pub percentage: f64,
}

/// Group expenses by category, sorted by total descending
///
/// Categories with equal totals keep the order in which they were first
/// seen in `expenses`.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut index_by_category: HashMap<&Category, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        let index = *index_by_category
            .entry(&expense.category)
            .or_insert_with(|| {
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    total: Money::zero(),
                    count: 0,
                    percentage: 0.0,
                });
                totals.len() - 1
            });
        let entry = &mut totals[index];
        entry.total += expense.amount;
        entry.count += 1;
    }

    let grand_total: Money = totals.iter().map(|t| t.total).sum();
    if !grand_total.is_zero() {
        for entry in &mut totals {
            entry.percentage = entry.total.cents() as f64 / grand_total.cents() as f64 * 100.0;
        }
    }

    // Vec::sort_by is stable, which keeps first-seen order among ties
    totals.sort_by(|a, b| b.total.cmp(&a.total));

    tracing::debug!(
        categories = totals.len(),
        expenses = expenses.len(),
        "aggregated category totals"
    );

    totals
}

/// The first `limit` entries of an already-sorted breakdown
pub fn top_categories(totals: &[CategoryTotal], limit: usize) -> &[CategoryTotal] {
    &totals[..limit.min(totals.len())]
}
