//! In-memory grid model of the workbook and the builders that fill it from
//! the literal content tables.
//!
//! Rows and columns are zero-based, matching the XLSX writer.

use tracing::debug;

use crate::content::{
    MATRIX_SHEET_NAME, MATRIX_TITLE, STAGE_COUNT, SUMMARY_SHEET_NAME, SUMMARY_TITLE,
    WORKSTREAM_LABEL, stage_descriptions, stage_names, workstreams,
};
use crate::style::{self, CellStyle};

/// First matrix row holding workstream data (after title and header).
pub const MATRIX_FIRST_DATA_ROW: u32 = 2;
/// First summary row holding a stage; the row under the banner stays blank.
pub const SUMMARY_FIRST_DATA_ROW: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u16,
    pub value: String,
    pub style: CellStyle,
}

/// Inclusive rectangle of merged cells. The top-left cell carries the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

impl MergedRange {
    pub fn contains(&self, row: u32, col: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_col..=self.last_col).contains(&col)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: String,
    pub cells: Vec<Cell>,
    pub merges: Vec<MergedRange>,
    pub column_widths: Vec<(u16, f64)>,
    pub row_heights: Vec<(u32, f64)>,
}

impl Page {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: Vec::new(),
            merges: Vec::new(),
            column_widths: Vec::new(),
            row_heights: Vec::new(),
        }
    }

    fn put(&mut self, row: u32, col: u16, value: &str, style: CellStyle) {
        self.cells.push(Cell {
            row,
            col,
            value: value.to_string(),
            style,
        });
    }

    /// Writes `value` into a merged banner spanning `first_col..=last_col` of `row`.
    fn put_banner(&mut self, row: u32, first_col: u16, last_col: u16, value: &str, style: CellStyle) {
        self.merges.push(MergedRange {
            first_row: row,
            first_col,
            last_row: row,
            last_col,
        });
        self.put(row, first_col, value, style);
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    /// Number of distinct rows holding at least one cell.
    pub fn row_count(&self) -> usize {
        let mut rows: Vec<u32> = self.cells.iter().map(|c| c.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows.len()
    }

    /// Cells of `row`, ordered by column.
    pub fn row(&self, row: u32) -> Vec<&Cell> {
        let mut cells: Vec<&Cell> = self.cells.iter().filter(|c| c.row == row).collect();
        cells.sort_by_key(|c| c.col);
        cells
    }

    pub fn row_height(&self, row: u32) -> Option<f64> {
        self.row_heights
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, h)| *h)
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths
            .iter()
            .find(|(c, _)| *c == col)
            .map(|(_, w)| *w)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.name == name)
    }
}

/// Assemble the full two-page maturity matrix document.
pub fn build_matrix_document() -> Document {
    Document {
        pages: vec![build_matrix_page(), build_summary_page()],
    }
}

/// Page 1: title banner, header row, one row per workstream.
pub fn build_matrix_page() -> Page {
    let mut page = Page::new(MATRIX_SHEET_NAME);
    let last_col = STAGE_COUNT as u16;

    page.column_widths.push((0, style::MATRIX_NAME_COLUMN_WIDTH));
    for col in 1..=last_col {
        page.column_widths.push((col, style::MATRIX_STAGE_COLUMN_WIDTH));
    }

    page.put_banner(0, 0, last_col, MATRIX_TITLE, CellStyle::title_banner(16.0));
    page.row_heights.push((0, style::MATRIX_TITLE_ROW_HEIGHT));

    page.put(1, 0, WORKSTREAM_LABEL, CellStyle::header());
    for (idx, name) in stage_names().iter().enumerate() {
        page.put(1, idx as u16 + 1, name, CellStyle::header());
    }
    page.row_heights.push((1, style::MATRIX_HEADER_ROW_HEIGHT));

    for (offset, workstream) in workstreams().iter().enumerate() {
        let row = MATRIX_FIRST_DATA_ROW + offset as u32;
        page.put(row, 0, workstream.name, CellStyle::workstream_name());
        for (idx, text) in workstream.stages.iter().enumerate() {
            page.put(row, idx as u16 + 1, text, CellStyle::stage_text(idx + 1));
        }
        page.row_heights.push((row, style::MATRIX_DATA_ROW_HEIGHT));
    }

    debug!(
        "Built '{}' page: {} cells, {} rows",
        page.name,
        page.cells.len(),
        page.row_count()
    );
    page
}

/// Page 2: title banner, then one row per stage with its description.
pub fn build_summary_page() -> Page {
    let mut page = Page::new(SUMMARY_SHEET_NAME);

    page.column_widths.push((0, style::SUMMARY_NAME_COLUMN_WIDTH));
    page.column_widths.push((1, style::SUMMARY_DESCRIPTION_COLUMN_WIDTH));

    page.put_banner(0, 0, 1, SUMMARY_TITLE, CellStyle::title_banner(14.0));
    page.row_heights.push((0, style::SUMMARY_TITLE_ROW_HEIGHT));

    for (offset, stage) in stage_descriptions().iter().enumerate() {
        let row = SUMMARY_FIRST_DATA_ROW + offset as u32;
        page.put(row, 0, stage.name, CellStyle::stage_name());
        page.put(row, 1, stage.description, CellStyle::stage_description());
        page.row_heights.push((row, style::SUMMARY_DATA_ROW_HEIGHT));
    }

    debug!(
        "Built '{}' page: {} cells, {} rows",
        page.name,
        page.cells.len(),
        page.row_count()
    );
    page
}
