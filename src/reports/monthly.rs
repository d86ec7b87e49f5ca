//! Monthly statement
//!
//! Filters the collection to one calendar month, computes the summary
//! block and lays the itemized table out for a document backend.

use serde::Serialize;

use super::layout::{build_layout, ColumnTitles, PageGeometry, ReportHeader, ReportLayout, TableRow};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::money::decimal;
use crate::models::{Category, CategoryCatalog, Expense, Money, ReportMonth};
use crate::render::{render_report, DocumentBackend, ReportArtifact};

/// Expenses and summary figures for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStatement {
    /// The month being reported
    pub month: ReportMonth,
    /// Expenses dated within the month, in input order
    pub expenses: Vec<Expense>,
    /// Sum of the month's amounts
    #[serde(serialize_with = "decimal::serialize")]
    pub total: Money,
    /// `total` divided by the number of days in the month
    #[serde(serialize_with = "decimal::serialize")]
    pub average_per_day: Money,
}

impl MonthlyStatement {
    /// Build the statement for `month`
    pub fn generate(expenses: &[Expense], month: ReportMonth) -> Self {
        let first = month.first_day();
        let last = month.last_day();

        let selected: Vec<Expense> = expenses
            .iter()
            .filter(|e| {
                let date = e.calendar_date();
                date >= first && date <= last
            })
            .cloned()
            .collect();

        let total: Money = selected.iter().map(|e| e.amount).sum();
        let average_per_day = total
            .divide_rounded(i64::from(month.days_in_month()))
            .unwrap_or_default();

        tracing::debug!(
            %month,
            selected = selected.len(),
            scanned = expenses.len(),
            "filtered monthly statement"
        );

        Self {
            month,
            expenses: selected,
            total,
            average_per_day,
        }
    }

    /// Build the statement for a `YYYY-MM` month string
    pub fn for_month(expenses: &[Expense], month: &str) -> ExpenseResult<Self> {
        let month = ReportMonth::parse(month).map_err(|_| ExpenseError::invalid_month(month))?;
        Ok(Self::generate(expenses, month))
    }

    /// Number of transactions in the month
    pub fn transaction_count(&self) -> usize {
        self.expenses.len()
    }

    /// Categories in this month that the catalog does not list
    pub fn unrecognized_categories(&self, catalog: &CategoryCatalog) -> Vec<&Category> {
        let mut unknown: Vec<&Category> = Vec::new();
        for expense in &self.expenses {
            if !expense.category.is_recognized(catalog) && !unknown.contains(&&expense.category) {
                unknown.push(&expense.category);
            }
        }
        unknown
    }

    /// Title and summary block
    pub fn header(&self, currency_symbol: &str) -> ReportHeader {
        ReportHeader {
            title: format!("{} Family Expense Report", currency_symbol),
            subtitle: format!("Monthly Statement - {}", self.month.long_label()),
            summary_lines: vec![
                format!(
                    "Total Expenses: {}",
                    self.total.format_with_symbol(currency_symbol)
                ),
                format!("Number of Transactions: {}", self.transaction_count()),
                format!(
                    "Average per Day: {}{}",
                    currency_symbol,
                    self.average_per_day.format_fixed()
                ),
            ],
            caption: "Expense Details:".to_string(),
        }
    }

    /// Formatted table rows in input order
    pub fn rows(&self) -> Vec<TableRow> {
        self.expenses.iter().map(TableRow::from_expense).collect()
    }

    /// Lay the statement out on pages
    pub fn layout(&self, currency_symbol: &str, geometry: PageGeometry) -> ReportLayout {
        build_layout(
            self.header(currency_symbol),
            ColumnTitles::new(currency_symbol),
            self.rows(),
            geometry,
        )
    }

    /// Suggested file name, e.g. `expense-report-March-2025.pdf`
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "expense-report-{}.{}",
            self.month.long_label().replace(' ', "-"),
            extension
        )
    }

    /// Lay out and draw the statement with `backend`
    pub fn render<B: DocumentBackend>(
        &self,
        currency_symbol: &str,
        geometry: PageGeometry,
        backend: &mut B,
    ) -> ExpenseResult<ReportArtifact> {
        let layout = self.layout(currency_symbol, geometry);
        let file_name = self.file_name(backend.extension());
        let artifact = render_report(&layout, backend, &file_name)?;

        tracing::info!(
            file = %artifact.file_name,
            pages = artifact.page_count,
            rows = self.transaction_count(),
            "rendered monthly statement"
        );
        Ok(artifact)
    }
}
