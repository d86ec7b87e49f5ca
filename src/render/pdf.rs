//! Minimal PDF 1.4 writer
//!
//! Produces an A4 document with the two standard Helvetica faces, text,
//! rules and filled rectangles. Layout coordinates are millimetres from the
//! top-left corner; PDF user space is points from the bottom-left, so every
//! position is converted on the way out.
//!
//! Output is deterministic: no creation date, no document id.

use std::fmt::Write as _;

use super::DocumentBackend;
use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::layout::{ColumnTitles, PageGeometry, ReportHeader, TableRow};

const POINTS_PER_MM: f32 = 72.0 / 25.4;

const TITLE_SIZE: f32 = 20.0;
const SUBTITLE_SIZE: f32 = 14.0;
const SUMMARY_SIZE: f32 = 12.0;
const TABLE_SIZE: f32 = 10.0;

const HEADER_GRAY: f32 = 240.0 / 255.0;
const SHADE_GRAY: f32 = 250.0 / 255.0;
const RULE_GRAY: f32 = 200.0 / 255.0;

// Fixed object numbers; page and content objects follow in pairs
const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const REGULAR_FONT_ID: usize = 3;
const BOLD_FONT_ID: usize = 4;
const FIRST_PAGE_ID: usize = 5;

#[derive(Debug, Clone, Copy)]
enum Font {
    Regular,
    Bold,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => "/F1",
            Font::Bold => "/F2",
        }
    }
}

/// Document backend writing PDF bytes
#[derive(Debug, Default)]
pub struct PdfBackend {
    geometry: Option<PageGeometry>,
    pages: Vec<String>,
}

impl PdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn geometry(&self) -> ExpenseResult<&PageGeometry> {
        self.geometry
            .as_ref()
            .ok_or_else(|| ExpenseError::Render("PDF document has not been started".into()))
    }

    fn page(&mut self) -> ExpenseResult<&mut String> {
        self.pages
            .last_mut()
            .ok_or_else(|| ExpenseError::Render("PDF document has no open page".into()))
    }

    fn to_x(x_mm: f32) -> f32 {
        x_mm * POINTS_PER_MM
    }

    fn to_y(geometry: &PageGeometry, y_mm: f32) -> f32 {
        (geometry.page_height - y_mm) * POINTS_PER_MM
    }

    fn text(&mut self, font: Font, size: f32, x_mm: f32, y_mm: f32, text: &str) -> ExpenseResult<()> {
        let y = Self::to_y(self.geometry()?, y_mm);
        let x = Self::to_x(x_mm);
        let encoded = encode_text(text);
        let page = self.page()?;
        let _ = writeln!(
            page,
            "BT {} {} Tf {:.2} {:.2} Td ({}) Tj ET",
            font.resource(),
            fmt_num(size),
            x,
            y,
            encoded
        );
        Ok(())
    }

    fn fill_rect(&mut self, gray: f32, x_mm: f32, top_mm: f32, w_mm: f32, h_mm: f32) -> ExpenseResult<()> {
        let y = Self::to_y(self.geometry()?, top_mm + h_mm);
        let page = self.page()?;
        let _ = writeln!(
            page,
            "{:.3} g {:.2} {:.2} {:.2} {:.2} re f 0 g",
            gray,
            Self::to_x(x_mm),
            y,
            w_mm * POINTS_PER_MM,
            h_mm * POINTS_PER_MM
        );
        Ok(())
    }

    fn rule(&mut self, x1_mm: f32, y1_mm: f32, x2_mm: f32, y2_mm: f32) -> ExpenseResult<()> {
        let geometry = self.geometry()?;
        let (y1, y2) = (Self::to_y(geometry, y1_mm), Self::to_y(geometry, y2_mm));
        let page = self.page()?;
        let _ = writeln!(
            page,
            "{:.3} G 0.5 w {:.2} {:.2} m {:.2} {:.2} l S 0 G",
            RULE_GRAY,
            Self::to_x(x1_mm),
            y1,
            Self::to_x(x2_mm),
            y2
        );
        Ok(())
    }

    fn cells(&mut self, font: Font, y: f32, cells: [&str; 4]) -> ExpenseResult<()> {
        let text_x = self.geometry()?.text_x;
        for (x, cell) in text_x.iter().zip(cells) {
            self.text(font, TABLE_SIZE, *x, y, cell)?;
        }
        Ok(())
    }

    fn assemble(&self, geometry: &PageGeometry) -> Vec<u8> {
        let page_ids: Vec<usize> = (0..self.pages.len())
            .map(|i| FIRST_PAGE_ID + 2 * i)
            .collect();
        let kids = page_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");

        let mut objects: Vec<String> = vec![
            format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids,
                self.pages.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let media_box = format!(
            "[0 0 {:.2} {:.2}]",
            geometry.page_width * POINTS_PER_MM,
            geometry.page_height * POINTS_PER_MM
        );
        for (content, page_id) in self.pages.iter().zip(&page_ids) {
            objects.push(format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox {} /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> /Contents {} 0 R >>",
                PAGES_ID,
                media_box,
                REGULAR_FONT_ID,
                BOLD_FONT_ID,
                page_id + 1
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ));
        }

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            let _ = write!(out, "{} 0 obj\n{}\nendobj\n", i + CATALOG_ID, body);
        }

        let xref_offset = out.len();
        let _ = write!(out, "xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            let _ = write!(out, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            CATALOG_ID,
            xref_offset
        );

        out.into_bytes()
    }
}

impl DocumentBackend for PdfBackend {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn begin(&mut self, geometry: &PageGeometry) -> ExpenseResult<()> {
        self.geometry = Some(geometry.clone());
        self.pages = vec![String::new()];
        Ok(())
    }

    fn draw_header(&mut self, header: &ReportHeader) -> ExpenseResult<()> {
        let g = self.geometry()?.clone();

        self.text(Font::Bold, TITLE_SIZE, g.margin_x, g.title_y, &header.title)?;
        self.text(Font::Regular, SUBTITLE_SIZE, g.margin_x, g.subtitle_y, &header.subtitle)?;

        let mut y = g.summary_y;
        for line in &header.summary_lines {
            self.text(Font::Regular, SUMMARY_SIZE, g.margin_x, y, line)?;
            y += g.summary_spacing;
        }

        self.text(Font::Bold, SUBTITLE_SIZE, g.margin_x, g.caption_y, &header.caption)
    }

    fn draw_table_header(&mut self, y: f32, columns: &ColumnTitles) -> ExpenseResult<()> {
        let g = self.geometry()?.clone();
        let top = y - g.header_band;

        self.fill_rect(HEADER_GRAY, g.table_left(), top, g.table_width(), g.header_band * 2.0)?;
        let titles = [
            columns.0[0].as_str(),
            columns.0[1].as_str(),
            columns.0[2].as_str(),
            columns.0[3].as_str(),
        ];
        self.cells(Font::Bold, y, titles)?;
        self.rule(g.table_left(), y + g.header_band, g.table_right(), y + g.header_band)
    }

    fn draw_row(&mut self, y: f32, _index: usize, shaded: bool, row: &TableRow) -> ExpenseResult<()> {
        let g = self.geometry()?.clone();
        let top = y - g.row_rise;
        let bottom = y + g.row_drop;

        if shaded {
            self.fill_rect(SHADE_GRAY, g.table_left(), top, g.table_width(), bottom - top)?;
        }
        self.cells(Font::Regular, y, row.cells())?;

        for x in g.column_edges {
            self.rule(x, top, x, bottom)?;
        }
        self.rule(g.table_left(), bottom, g.table_right(), bottom)
    }

    fn page_break(&mut self) -> ExpenseResult<()> {
        self.geometry()?;
        self.pages.push(String::new());
        Ok(())
    }

    fn finish(&mut self) -> ExpenseResult<Vec<u8>> {
        let geometry = self.geometry()?.clone();
        let bytes = self.assemble(&geometry);
        self.geometry = None;
        self.pages.clear();
        Ok(bytes)
    }
}

/// Escape text for a PDF string literal in WinAnsiEncoding
///
/// Latin-1 characters are written as octal escapes, the rupee sign as
/// "Rs." and anything else the standard fonts cannot show as '?'.
fn encode_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '₹' => out.push_str("Rs."),
            ' '..='~' => out.push(ch),
            '\u{a0}'..='\u{ff}' => {
                let _ = write!(out, "\\{:03o}", ch as u32);
            }
            _ => out.push('?'),
        }
    }
    out
}

fn fmt_num(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
