//! Reports dashboard
//!
//! Everything the reports screen shows for one reference instant: the
//! weekly and monthly trend series, the category breakdown with its legend,
//! and the statistic cards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::categories::{category_totals, top_categories, CategoryTotal};
use super::statistics::SpendingStatistics;
use super::trend::{trailing_buckets, Bucket};
use super::ReportOptions;
use crate::error::ExpenseResult;
use crate::models::{Expense, Granularity};

/// Aggregated view of an expense collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportsDashboard {
    /// Reference instant the trailing windows end at
    pub generated_for: DateTime<Utc>,
    pub weekly: Vec<Bucket>,
    pub monthly: Vec<Bucket>,
    /// Full breakdown, largest first
    pub categories: Vec<CategoryTotal>,
    /// The first `legend_size` entries of `categories`
    pub legend: Vec<CategoryTotal>,
    pub statistics: SpendingStatistics,
}

impl ReportsDashboard {
    /// Aggregate `expenses` relative to `now`
    pub fn generate(
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
        let categories = category_totals(expenses);
        let legend = top_categories(&categories, options.legend_size).to_vec();
        let statistics = SpendingStatistics::from_buckets(expenses, &weekly, &monthly);

        Ok(Self {
            generated_for: now,
            weekly,
            monthly,
            categories,
            legend,
            statistics,
        })
    }
}
