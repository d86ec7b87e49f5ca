//! Document rendering
//!
//! A `DocumentBackend` interprets the layout commands produced by
//! `reports::layout`. `render_report` drives any backend through a whole
//! layout and only hands back an artifact once the backend has finished.

pub mod pdf;
pub mod text;

pub use pdf::PdfBackend;
pub use text::TextBackend;

use serde::Serialize;

use crate::error::ExpenseResult;
use crate::reports::layout::{ColumnTitles, LayoutCommand, PageGeometry, ReportHeader, ReportLayout, TableRow};

/// A finished document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportArtifact {
    pub file_name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Something that can draw positioned report commands into a document
pub trait DocumentBackend {
    /// File extension of the produced document, without the dot
    fn extension(&self) -> &'static str;

    /// Start a new document with its first page
    fn begin(&mut self, geometry: &PageGeometry) -> ExpenseResult<()>;

    fn draw_header(&mut self, header: &ReportHeader) -> ExpenseResult<()>;

    fn draw_table_header(&mut self, y: f32, columns: &ColumnTitles) -> ExpenseResult<()>;

    fn draw_row(&mut self, y: f32, index: usize, shaded: bool, row: &TableRow) -> ExpenseResult<()>;

    fn page_break(&mut self) -> ExpenseResult<()>;

    /// Close the document and return its bytes
    fn finish(&mut self) -> ExpenseResult<Vec<u8>>;
}

/// Draw every command of `layout` with `backend`
///
/// Any backend failure aborts the render; no partial artifact is returned.
pub fn render_report<B: DocumentBackend + ?Sized>(
    layout: &ReportLayout,
    backend: &mut B,
    file_name: &str,
) -> ExpenseResult<ReportArtifact> {
    backend.begin(&layout.geometry)?;

    for command in &layout.commands {
        match command {
            LayoutCommand::DrawHeader(header) => backend.draw_header(header)?,
            LayoutCommand::DrawTableHeader { y, columns } => backend.draw_table_header(*y, columns)?,
            LayoutCommand::DrawRow {
                y,
                index,
                shaded,
                row,
            } => backend.draw_row(*y, *index, *shaded, row)?,
            LayoutCommand::PageBreak => backend.page_break()?,
        }
    }

    let bytes = backend.finish()?;

    tracing::debug!(
        file = file_name,
        pages = layout.page_count,
        bytes = bytes.len(),
        "document finished"
    );

    Ok(ReportArtifact {
        file_name: file_name.to_string(),
        bytes,
        page_count: layout.page_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::reports::layout::build_layout;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        fail_on_row: Option<usize>,
    }

    impl DocumentBackend for Recorder {
        fn extension(&self) -> &'static str {
            "log"
        }

        fn begin(&mut self, _geometry: &PageGeometry) -> ExpenseResult<()> {
            self.events.push("begin".into());
            Ok(())
        }

        fn draw_header(&mut self, header: &ReportHeader) -> ExpenseResult<()> {
            self.events.push(format!("header {}", header.title));
            Ok(())
        }

        fn draw_table_header(&mut self, y: f32, _columns: &ColumnTitles) -> ExpenseResult<()> {
            self.events.push(format!("table {}", y));
            Ok(())
        }

        fn draw_row(&mut self, _y: f32, index: usize, _shaded: bool, _row: &TableRow) -> ExpenseResult<()> {
            if self.fail_on_row == Some(index) {
                return Err(ExpenseError::Render("out of ink".into()));
            }
            self.events.push(format!("row {}", index));
            Ok(())
        }

        fn page_break(&mut self) -> ExpenseResult<()> {
            self.events.push("break".into());
            Ok(())
        }

        fn finish(&mut self) -> ExpenseResult<Vec<u8>> {
            self.events.push("finish".into());
            Ok(self.events.join("\n").into_bytes())
        }
    }

    fn layout(rows: usize) -> ReportLayout {
        let header = ReportHeader {
            title: "Title".into(),
            subtitle: "Sub".into(),
            summary_lines: vec![],
            caption: "Expense Details:".into(),
        };
        let rows = (0..rows)
            .map(|i| TableRow {
                date: "01/03".into(),
                description: format!("row {}", i),
                category: "Others".into(),
                amount: "1.00".into(),
            })
            .collect();
        build_layout(header, ColumnTitles::new("₹"), rows, PageGeometry::default())
    }

    #[test]
    fn test_commands_are_dispatched_in_order() {
        let mut backend = Recorder::default();
        let artifact = render_report(&layout(2), &mut backend, "report.log").unwrap();

        assert_eq!(
            backend.events,
            vec!["begin", "header Title", "table 120", "row 0", "row 1", "finish"]
        );
        assert_eq!(artifact.file_name, "report.log");
        assert_eq!(artifact.page_count, 1);
    }

    #[test]
    fn test_failure_yields_no_artifact() {
        let mut backend = Recorder {
            fail_on_row: Some(1),
            ..Recorder::default()
        };
        let result = render_report(&layout(3), &mut backend, "report.log");

        assert!(matches!(result, Err(ExpenseError::Render(_))));
        assert!(!backend.events.contains(&"finish".to_string()));
    }
}
