//! CLI commands for reports
//!
//! Provides the dashboard, trend and category views, and the monthly
//! statement export.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::CliContext;
use crate::error::ExpenseResult;
use crate::export::statement_csv_bytes;
use crate::models::Granularity;
use crate::render::{PdfBackend, TextBackend};
use crate::display::{bucket_table, category_table, format_dashboard};
use crate::reports::{
    category_totals, top_categories, trailing_buckets, MonthlyStatement, PageGeometry,
    ReportsDashboard,
};
use crate::storage::write_bytes_atomic;

/// Bucket size for the `trend` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrendGranularity {
    Week,
    Month,
}

impl From<TrendGranularity> for Granularity {
    fn from(value: TrendGranularity) -> Self {
        match value {
            TrendGranularity::Week => Granularity::Week,
            TrendGranularity::Month => Granularity::Month,
        }
    }
}

/// Output format for the `report` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Text,
    Csv,
}

/// Handle the summary command
pub fn handle_summary_command(ctx: &CliContext, json: bool) -> ExpenseResult<()> {
    let dashboard = ReportsDashboard::generate(ctx.snapshot.expenses(), ctx.now, &ctx.options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", format_dashboard(&dashboard, &ctx.options.currency_symbol));
    }
    Ok(())
}

/// Handle the trend command
pub fn handle_trend_command(
    ctx: &CliContext,
    granularity: TrendGranularity,
    count: Option<usize>,
    json: bool,
) -> ExpenseResult<()> {
    let granularity = Granularity::from(granularity);
    let count = count.unwrap_or(match granularity {
        Granularity::Week => ctx.options.weekly_buckets,
        Granularity::Month => ctx.options.monthly_buckets,
    });

    let buckets = trailing_buckets(
        ctx.snapshot.expenses(),
        ctx.now,
        granularity,
        count,
        ctx.options.week_start,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
    } else {
        println!("Spending by {} (last {})", granularity, count);
        println!("{}", bucket_table(&buckets, &ctx.options.currency_symbol));
    }
    Ok(())
}

/// Handle the categories command
pub fn handle_categories_command(
    ctx: &CliContext,
    top: Option<usize>,
    json: bool,
) -> ExpenseResult<()> {
    let totals = category_totals(ctx.snapshot.expenses());
    let shown = top_categories(&totals, top.unwrap_or(totals.len()));

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        println!("{}", category_table(shown, &ctx.options.currency_symbol));
        if shown.len() < totals.len() {
            println!("(showing top {} of {} categories)", shown.len(), totals.len());
        }
    }
    Ok(())
}

/// Handle the report command: render one month and write it to disk
pub fn handle_report_command(
    ctx: &CliContext,
    month: &str,
    format: ReportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let statement = MonthlyStatement::for_month(ctx.snapshot.expenses(), month)?;

    for category in statement.unrecognized_categories(&ctx.options.catalog) {
        tracing::warn!(%category, month = %statement.month, "category is not in the configured list");
    }

    let symbol = &ctx.options.currency_symbol;
    let geometry = PageGeometry::default();
    let (file_name, bytes, pages) = match format {
        ReportFormat::Pdf => {
            let artifact = statement.render(symbol, geometry, &mut PdfBackend::new())?;
            (artifact.file_name, artifact.bytes, Some(artifact.page_count))
        }
        ReportFormat::Text => {
            let artifact = statement.render(symbol, geometry, &mut TextBackend::new())?;
            (artifact.file_name, artifact.bytes, Some(artifact.page_count))
        }
        ReportFormat::Csv => (statement.file_name("csv"), statement_csv_bytes(&statement)?, None),
    };

    let target = resolve_output(output, &ctx.paths.reports_dir(), &file_name);
    write_bytes_atomic(&target, &bytes)?;

    println!(
        "{}: {} transactions, total {}",
        statement.month.long_label(),
        statement.transaction_count(),
        statement.total.format_with_symbol(symbol)
    );
    match pages {
        Some(1) => println!("Report written to {} (1 page)", target.display()),
        Some(pages) => println!("Report written to {} ({} pages)", target.display(), pages),
        None => println!("Report written to {}", target.display()),
    }
    Ok(())
}

/// Handle the config command
///
/// With `init`, persists the active settings so they can be edited by hand.
/// An existing settings file is left untouched.
pub fn handle_config_command(ctx: &CliContext, init: bool) -> ExpenseResult<()> {
    if init {
        let settings_file = ctx.paths.settings_file();
        if settings_file.exists() {
            println!("Settings file already exists: {}", settings_file.display());
        } else {
            ctx.settings.save(&ctx.paths)?;
            tracing::info!(path = %settings_file.display(), "wrote settings file");
            println!("Wrote settings to {}", settings_file.display());
        }
        return Ok(());
    }

    println!("Family Expense Configuration");
    println!("============================");
    println!("Base directory:    {}", ctx.paths.base_dir().display());
    println!("Settings file:     {}", ctx.paths.settings_file().display());
    println!("Expense store:     {}", ctx.data_file.display());
    println!("Reports directory: {}", ctx.paths.reports_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", ctx.options.currency_symbol);
    println!("  Week starts on:  {}", ctx.options.week_start);
    println!("  Weekly buckets:  {}", ctx.options.weekly_buckets);
    println!("  Monthly buckets: {}", ctx.options.monthly_buckets);
    println!("  Legend size:     {}", ctx.options.legend_size);
    let labels: Vec<&str> = ctx.options.catalog.labels().iter().map(|c| c.as_str()).collect();
    println!("  Categories:      {}", labels.join(", "));
    println!();
    println!("Expenses loaded: {}", ctx.snapshot.len());
    Ok(())
}

/// Where to write an artifact: a file path, a directory, or the reports dir
fn resolve_output(output: Option<PathBuf>, reports_dir: &Path, file_name: &str) -> PathBuf {
    match output {
        None => reports_dir.join(file_name),
        Some(path) if path.is_dir() || ends_with_separator(&path) => path.join(file_name),
        Some(path) => path,
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}
