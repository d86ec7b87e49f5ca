//! Summary statistics for the reports screen
//!
//! Weekly and monthly averages over the trailing trend windows, plus the
//! grand total over the whole collection.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::trend::{trailing_buckets, Bucket};
use super::ReportOptions;
use crate::error::ExpenseResult;
use crate::models::money::decimal;
use crate::models::{Expense, Granularity, Money};

/// Sum of every expense amount, independent of any window
pub fn grand_total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Average bucket total, or `None` for an empty series
pub fn average_per_bucket(buckets: &[Bucket]) -> Option<Money> {
    let total: Money = buckets.iter().map(|b| b.total).sum();
    total.divide_rounded(buckets.len() as i64)
}

/// The three statistic cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingStatistics {
    /// Average per week over the trailing weekly window
    #[serde(serialize_with = "decimal::serialize")]
    pub weekly_average: Money,
    /// Average per month over the trailing monthly window
    #[serde(serialize_with = "decimal::serialize")]
    pub monthly_average: Money,
    /// Sum of the entire collection
    #[serde(serialize_with = "decimal::serialize")]
    pub grand_total: Money,
}

impl SpendingStatistics {
    /// Compute all statistics for `now` using the configured window sizes
    pub fn compute(
        expenses: &[Expense],
        now: DateTime<Utc>,
        options: &ReportOptions,
    ) -> ExpenseResult<Self> {
        let weekly = trailing_buckets(
            expenses,
            now,
            Granularity::Week,
            options.weekly_buckets,
            options.week_start,
        )?;
        let monthly = trailing_buckets(
            expenses,
            now,
            Granularity::Month,
            options.monthly_buckets,
            options.week_start,
        )?;
        Ok(Self::from_buckets(expenses, &weekly, &monthly))
    }

    /// Compute statistics from already-built weekly and monthly series
    ///
    /// Both series must be non-empty; `Settings::validate` guarantees that
    /// for configured window sizes.
    pub fn from_buckets(expenses: &[Expense], weekly: &[Bucket], monthly: &[Bucket]) -> Self {
        debug_assert!(!weekly.is_empty() && !monthly.is_empty());
        Self {
            weekly_average: average_per_bucket(weekly).unwrap_or_default(),
            monthly_average: average_per_bucket(monthly).unwrap_or_default(),
            grand_total: grand_total(expenses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekStart;
    use crate::reports::test_support::{at, date, expense};

    #[test]
    fn test_average_per_bucket() {
        let buckets = trailing_buckets(
            &[
                expense("a", 40_000, "Food", date(2025, 3, 3)),
                expense("b", 20_000, "Food", date(2025, 2, 24)),
            ],
            at(2025, 3, 5, 0),
            Granularity::Week,
            4,
            WeekStart::Sunday,
        )
        .unwrap();
        assert_eq!(average_per_bucket(&buckets), Some(Money::from_cents(15_000)));
        assert_eq!(average_per_bucket(&[]), None);
    }

    #[test]
    fn test_grand_total_ignores_windows() {
        let expenses = vec![
            expense("old", 100_000, "Travel", date(2019, 6, 1)),
            expense("new", 2_500, "Food", date(2025, 3, 3)),
        ];
        assert_eq!(grand_total(&expenses).cents(), 102_500);
        assert_eq!(grand_total(&[]), Money::zero());
    }

    #[test]
    fn test_compute_with_defaults() {
        let expenses = vec![
            expense("rent", 600_000, "Bills & Utilities", date(2025, 3, 1)),
            expense("groceries", 12_000, "Food & Dining", date(2025, 3, 4)),
            expense("old trip", 900_000, "Travel", date(2024, 1, 10)),
        ];
        let stats =
            SpendingStatistics::compute(&expenses, at(2025, 3, 5, 10), &ReportOptions::default())
                .unwrap();

        // Weeks: Feb 9, Feb 16, Feb 23, Mar 2 -> rent (Mar 1) and groceries (Mar 4)
        assert_eq!(stats.weekly_average.cents(), (600_000 + 12_000) / 4);
        // Months: Oct..Mar -> rent and groceries
        assert_eq!(stats.monthly_average.cents(), 102_000);
        assert_eq!(stats.grand_total.cents(), 1_512_000);
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let stats =
            SpendingStatistics::compute(&[], at(2025, 3, 5, 10), &ReportOptions::default()).unwrap();
        assert_eq!(stats.weekly_average, Money::zero());
        assert_eq!(stats.monthly_average, Money::zero());
        assert_eq!(stats.grand_total, Money::zero());
    }

    #[test]
    fn test_oversized_window_propagates_error() {
        let options = ReportOptions {
            monthly_buckets: 3_200_000,
            ..ReportOptions::default()
        };
        assert!(SpendingStatistics::compute(&[], at(2025, 3, 5, 10), &options).is_err());
    }
}
