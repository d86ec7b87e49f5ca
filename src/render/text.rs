//! Plain-text statement backend
//!
//! Renders the same layout as fixed-width text. Pages are separated by a
//! form feed; vertical positions are ignored.

use std::fmt::Write as _;

use super::DocumentBackend;
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::layout::{ColumnTitles, PageGeometry, ReportHeader, TableRow};

const DATE_WIDTH: usize = 6;
const DESCRIPTION_WIDTH: usize = 25;
const CATEGORY_WIDTH: usize = 15;
const AMOUNT_WIDTH: usize = 12;
const FORM_FEED: char = '\u{c}';

#[derive(Debug, Default)]
pub struct TextBackend {
    output: Option<String>,
}

impl TextBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn output(&mut self) -> ExpenseResult<&mut String> {
        self.output
            .as_mut()
            .ok_or_else(|| ExpenseError::Render("text document has not been started".into()))
    }

    fn line(cells: [&str; 4]) -> String {
        format!(
            "{:<dw$} {:<sw$} {:<cw$} {:>aw$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            dw = DATE_WIDTH,
            sw = DESCRIPTION_WIDTH,
            cw = CATEGORY_WIDTH,
            aw = AMOUNT_WIDTH
        )
    }

    fn table_width() -> usize {
        DATE_WIDTH + DESCRIPTION_WIDTH + CATEGORY_WIDTH + AMOUNT_WIDTH + 3
    }
}

impl DocumentBackend for TextBackend {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn begin(&mut self, _geometry: &PageGeometry) -> ExpenseResult<()> {
        self.output = Some(String::new());
        Ok(())
    }

    fn draw_header(&mut self, header: &ReportHeader) -> ExpenseResult<()> {
        let out = self.output()?;
        let _ = writeln!(out, "{}", header.title);
        let _ = writeln!(out, "{}", header.subtitle);
        out.push('\n');
        for line in &header.summary_lines {
            let _ = writeln!(out, "{}", line);
        }
        out.push('\n');
        let _ = writeln!(out, "{}", header.caption);
        out.push('\n');
        Ok(())
    }

    fn draw_table_header(&mut self, _y: f32, columns: &ColumnTitles) -> ExpenseResult<()> {
        let out = self.output()?;
        let titles = [
            columns.0[0].as_str(),
            columns.0[1].as_str(),
            columns.0[2].as_str(),
            columns.0[3].as_str(),
        ];
        let _ = writeln!(out, "{}", Self::line(titles).trim_end());
        let _ = writeln!(out, "{}", "-".repeat(Self::table_width()));
        Ok(())
    }

    fn draw_row(&mut self, _y: f32, _index: usize, _shaded: bool, row: &TableRow) -> ExpenseResult<()> {
        let out = self.output()?;
        let _ = writeln!(out, "{}", Self::line(row.cells()));
        Ok(())
    }

    fn page_break(&mut self) -> ExpenseResult<()> {
        let out = self.output()?;
        out.push(FORM_FEED);
        out.push('\n');
        Ok(())
    }

    fn finish(&mut self) -> ExpenseResult<Vec<u8>> {
        self.output
            .take()
            .map(String::into_bytes)
            .ok_or_else(|| ExpenseError::Render("text document has not been started".into()))
    }
}
