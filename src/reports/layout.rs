//! Page layout for monthly statements
//!
//! Layout is kept separate from drawing: `build_layout` turns a header and
//! a list of table rows into positioned commands, including page breaks,
//! and a `DocumentBackend` later interprets them. Coordinates are in
//! millimetres from the top-left corner of an A4 page.

use serde::Serialize;

use crate::models::Expense;

/// Descriptions longer than this are cut in the table
pub const DESCRIPTION_LIMIT: usize = 25;
/// Categories longer than this are cut in the table
pub const CATEGORY_LIMIT: usize = 15;

const ELLIPSIS: &str = "...";

/// Fixed page and table geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    /// Left edge of header text
    pub margin_x: f32,
    pub title_y: f32,
    pub subtitle_y: f32,
    /// Baseline of the first summary line
    pub summary_y: f32,
    pub summary_spacing: f32,
    /// Baseline of the "Expense Details:" caption
    pub caption_y: f32,
    /// Table header baseline on the first page
    pub first_table_y: f32,
    /// Table header baseline on continuation pages
    pub continuation_top: f32,
    pub row_height: f32,
    /// A row whose baseline would pass this moves to a new page
    pub page_bottom: f32,
    /// Vertical rules: left edge, three separators, right edge
    pub column_edges: [f32; 5],
    /// Text start of each column
    pub text_x: [f32; 4],
    /// Half height of the header band around its baseline
    pub header_band: f32,
    /// Row box extends this far above the baseline
    pub row_rise: f32,
    /// Row box extends this far below the baseline
    pub row_drop: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin_x: 20.0,
            title_y: 30.0,
            subtitle_y: 45.0,
            summary_y: 65.0,
            summary_spacing: 10.0,
            caption_y: 105.0,
            first_table_y: 120.0,
            continuation_top: 30.0,
            row_height: 15.0,
            page_bottom: 270.0,
            column_edges: [20.0, 50.0, 115.0, 155.0, 190.0],
            text_x: [25.0, 55.0, 120.0, 160.0],
            header_band: 5.0,
            row_rise: 7.0,
            row_drop: 8.0,
        }
    }
}

impl PageGeometry {
    pub fn table_left(&self) -> f32 {
        self.column_edges[0]
    }

    pub fn table_right(&self) -> f32 {
        self.column_edges[4]
    }

    pub fn table_width(&self) -> f32 {
        self.table_right() - self.table_left()
    }
}

/// Title and summary block drawn once, on the first page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHeader {
    pub title: String,
    pub subtitle: String,
    pub summary_lines: Vec<String>,
    pub caption: String,
}

/// Table column titles, identical on every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnTitles(pub [String; 4]);

impl ColumnTitles {
    pub fn new(currency_symbol: &str) -> Self {
        Self([
            "Date".to_string(),
            "Description".to_string(),
            "Category".to_string(),
            format!("Amount ({})", currency_symbol),
        ])
    }
}

/// One formatted table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Day and month, `dd/MM`
    pub date: String,
    pub description: String,
    pub category: String,
    /// Two decimals, no grouping
    pub amount: String,
}

impl TableRow {
    /// Format an expense for the table, truncating long text
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.calendar_date().format("%d/%m").to_string(),
            description: truncate(&expense.description, DESCRIPTION_LIMIT),
            category: truncate(expense.category.as_str(), CATEGORY_LIMIT),
            amount: expense.amount.format_fixed(),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.description, &self.category, &self.amount]
    }
}

/// Cut text longer than `max_chars` to `max_chars - 3` characters plus "..."
///
/// Counts characters, not bytes.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// A positioned drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum LayoutCommand {
    /// Title, subtitle, summary lines and caption (first page only)
    DrawHeader(ReportHeader),
    /// Column titles with the header band, baseline at `y`
    DrawTableHeader { y: f32, columns: ColumnTitles },
    /// One expense row; `index` counts rows across the whole table
    DrawRow {
        y: f32,
        index: usize,
        shaded: bool,
        row: TableRow,
    },
    /// Start a new page
    PageBreak,
}

/// The full command list for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLayout {
    pub geometry: PageGeometry,
    pub commands: Vec<LayoutCommand>,
    pub page_count: usize,
}

impl ReportLayout {
    /// Number of rows placed on each page, in page order
    pub fn rows_per_page(&self) -> Vec<usize> {
        let mut pages = vec![0usize];
        for command in &self.commands {
            match command {
                LayoutCommand::PageBreak => pages.push(0),
                LayoutCommand::DrawRow { .. } => {
                    if let Some(current) = pages.last_mut() {
                        *current += 1;
                    }
                }
                _ => {}
            }
        }
        pages
    }

    /// All rows in emission order
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.commands.iter().filter_map(|command| match command {
            LayoutCommand::DrawRow { row, .. } => Some(row),
            _ => None,
        })
    }
}

/// Lay out a header and rows, breaking pages when the cursor passes the bottom
pub fn build_layout(
    header: ReportHeader,
    columns: ColumnTitles,
    rows: Vec<TableRow>,
    geometry: PageGeometry,
) -> ReportLayout {
    let mut commands = Vec::with_capacity(rows.len() + 3);
    let mut page_count = 1;

    commands.push(LayoutCommand::DrawHeader(header));

    let mut y = geometry.first_table_y;
    commands.push(LayoutCommand::DrawTableHeader {
        y,
        columns: columns.clone(),
    });
    y += geometry.row_height;

    for (index, row) in rows.into_iter().enumerate() {
        if y > geometry.page_bottom {
            commands.push(LayoutCommand::PageBreak);
            page_count += 1;

            y = geometry.continuation_top;
            commands.push(LayoutCommand::DrawTableHeader {
                y,
                columns: columns.clone(),
            });
            y += geometry.row_height;
        }

        commands.push(LayoutCommand::DrawRow {
            y,
            index,
            shaded: index % 2 == 1,
            row,
        });
        y += geometry.row_height;
    }

    ReportLayout {
        geometry,
        commands,
        page_count,
    }
}
