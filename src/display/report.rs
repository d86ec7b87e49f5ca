//! Report formatting utilities for terminal output
//!
//! The dashboard layout plus the table builders and small formatting
//! helpers the CLI report commands share.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::reports::{Bucket, CategoryTotal, ReportsDashboard, SpendingStatistics};

const BAR_WIDTH: usize = 20;
const WIDTH: usize = 60;

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Expenses")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the dashboard for terminal output
pub fn format_dashboard(dashboard: &ReportsDashboard, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Family Expense Reports", WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{}\n",
        format_header(
            &format!("as of {}", dashboard.generated_for.format("%Y-%m-%d")),
            WIDTH
        )
    ));
    output.push_str(&double_separator(WIDTH));
    output.push_str("\n\n");

    output.push_str(&statistics_lines(&dashboard.statistics, currency_symbol));
    output.push('\n');

    output.push_str("Weekly Trend\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&bucket_table(&dashboard.weekly, currency_symbol));
    output.push_str("\n\n");

    output.push_str("Monthly Trend\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&bucket_table(&dashboard.monthly, currency_symbol));
    output.push_str("\n\n");

    output.push_str("Top Categories\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&category_table(&dashboard.legend, currency_symbol));
    output.push('\n');

    let hidden = dashboard.categories.len().saturating_sub(dashboard.legend.len());
    if hidden > 0 {
        output.push_str(&format!("(+{} more categories)\n", hidden));
    }

    output
}

/// Trend buckets as a table, oldest first
pub fn bucket_table(buckets: &[Bucket], currency_symbol: &str) -> String {
    if buckets.is_empty() {
        return "No periods to show.".to_string();
    }

    let rows = buckets.iter().map(|b| BucketRow {
        period: b.period_label.clone(),
        from: b.range_start.format("%Y-%m-%d").to_string(),
        to: b.range_end.format("%Y-%m-%d").to_string(),
        count: b.count,
        total: b.total.format_with_symbol(currency_symbol),
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string()
}

/// Category totals as a table with a proportional bar
pub fn category_table(totals: &[CategoryTotal], currency_symbol: &str) -> String {
    if totals.is_empty() {
        return "No expenses found.".to_string();
    }

    let max = totals
        .iter()
        .map(|t| t.total.to_f64())
        .fold(0.0_f64, f64::max);

    let rows = totals.iter().map(|t| CategoryRow {
        category: t.category.to_string(),
        count: t.count,
        total: t.total.format_with_symbol(currency_symbol),
        share: format_percentage(t.percentage),
        bar: format_bar(t.total.to_f64(), max, BAR_WIDTH),
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..4)).with(Alignment::right()))
        .to_string()
}

/// The three statistic cards, one per line
pub fn statistics_lines(stats: &SpendingStatistics, currency_symbol: &str) -> String {
    format!(
        "{:<24} {:>16}\n{:<24} {:>16}\n{:<24} {:>16}\n",
        "Weekly Average",
        stats.weekly_average.format_with_symbol(currency_symbol),
        "Monthly Average",
        stats.monthly_average.format_with_symbol(currency_symbol),
        "Total Expenses",
        stats.grand_total.format_with_symbol(currency_symbol),
    )
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center a title in a field of the given width
fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

fn separator(width: usize) -> String {
    "─".repeat(width)
}

fn double_separator(width: usize) -> String {
    "═".repeat(width)
}
