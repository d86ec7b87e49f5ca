use std::path::PathBuf;

use anyhow::Result;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

use family_expense::cli::{
    handle_categories_command, handle_config_command, handle_report_command,
    handle_summary_command, handle_trend_command, CliContext, ReportFormat, TrendGranularity,
};
use family_expense::config::ExpensePaths;
use family_expense::logging::init_tracing;
use family_expense::reports::MAX_BUCKETS;

#[derive(Parser)]
#[command(
    name = "family-expense",
    version,
    about = "Expense reports for a family expense tracker",
    long_about = "Aggregates recorded household expenses into weekly and monthly \
                  trends, category breakdowns and summary statistics, and renders \
                  paginated monthly statements."
)]
struct Cli {
    /// Expense store to read instead of the configured data.json
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Reference date for trailing windows (YYYY-MM-DD, default today)
    #[arg(long, global = true, value_name = "DATE")]
    now: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show trends, top categories and statistics
    #[command(alias = "dashboard")]
    Summary {
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Show spending over trailing weeks or months
    Trend {
        /// Bucket size
        #[arg(short, long, value_enum, default_value = "week")]
        granularity: TrendGranularity,

        /// Number of buckets (defaults to the configured window)
        #[arg(
            short,
            long,
            value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_BUCKETS as u64)
        )]
        count: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Show spending by category, largest first
    Categories {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Render the monthly statement for a month (YYYY-MM)
    Report {
        /// Month to report on, e.g. 2025-03
        month: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "pdf")]
        format: ReportFormat,

        /// Output file or directory (defaults to the reports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Write the active settings to the settings file if it is missing
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("family-expense - expense reports");
        println!();
        println!("Run 'family-expense --help' for usage information.");
        return Ok(());
    };

    let paths = ExpensePaths::new()?;
    let ctx = CliContext::load(paths, cli.data, cli.now.as_deref())?;

    match command {
        Commands::Summary { json } => handle_summary_command(&ctx, json)?,
        Commands::Trend {
            granularity,
            count,
            json,
        } => handle_trend_command(&ctx, granularity, count, json)?,
        Commands::Categories { top, json } => handle_categories_command(&ctx, top, json)?,
        Commands::Report {
            month,
            format,
            output,
        } => handle_report_command(&ctx, &month, format, output)?,
        Commands::Config { init } => handle_config_command(&ctx, init)?,
    }

    Ok(())
}
