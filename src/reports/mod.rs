//! Reports module for family-expense
//!
//! Turns an expense snapshot into trend buckets, category breakdowns,
//! summary statistics and paginated monthly statements.

pub mod categories;
pub mod dashboard;
pub mod layout;
pub mod monthly;
pub mod statistics;
pub mod trend;

pub use categories::{category_totals, top_categories, CategoryTotal};
pub use dashboard::ReportsDashboard;
pub use layout::{build_layout, ColumnTitles, LayoutCommand, PageGeometry, ReportHeader, ReportLayout, TableRow};
pub use monthly::MonthlyStatement;
pub use statistics::{average_per_bucket, grand_total, SpendingStatistics};
pub use trend::{trailing_buckets, Bucket, MAX_BUCKETS};

use crate::models::{CategoryCatalog, WeekStart};

/// Settings the report engine reads; built from `config::Settings`
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Currency symbol for summary lines and the amount column title
    pub currency_symbol: String,
    /// Week start used to cut weekly buckets
    pub week_start: WeekStart,
    /// Trailing weeks averaged by the weekly statistic (must be positive)
    pub weekly_buckets: usize,
    /// Trailing months averaged by the monthly statistic (must be positive)
    pub monthly_buckets: usize,
    /// Entries in the category legend
    pub legend_size: usize,
    /// Recognized category labels
    pub catalog: CategoryCatalog,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            week_start: WeekStart::default(),
            weekly_buckets: 4,
            monthly_buckets: 6,
            legend_size: 6,
            catalog: CategoryCatalog::default(),
        }
    }
}
