//! Fixed visual style of the matrix workbook.

use crate::content::STAGE_COUNT;

pub const WHITE: u32 = 0xFFFFFF;
/// Title banner fill (dark blue).
pub const HEADER_FILL: u32 = 0x1F4E78;
/// Header row and summary stage-name fill.
pub const WORKSTREAM_FILL: u32 = 0x4472C4;
/// Per-stage tint, light grey through green.
pub const STAGE_FILLS: [u32; STAGE_COUNT] = [0xF2F2F2, 0xE7E6E6, 0xD9E1F2, 0xC5E0B4, 0xA9D18E];

pub const MATRIX_NAME_COLUMN_WIDTH: f64 = 30.0;
pub const MATRIX_STAGE_COLUMN_WIDTH: f64 = 45.0;
pub const MATRIX_TITLE_ROW_HEIGHT: f64 = 30.0;
pub const MATRIX_HEADER_ROW_HEIGHT: f64 = 40.0;
pub const MATRIX_DATA_ROW_HEIGHT: f64 = 150.0;

pub const SUMMARY_NAME_COLUMN_WIDTH: f64 = 25.0;
pub const SUMMARY_DESCRIPTION_COLUMN_WIDTH: f64 = 80.0;
pub const SUMMARY_TITLE_ROW_HEIGHT: f64 = 25.0;
pub const SUMMARY_DATA_ROW_HEIGHT: f64 = 60.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    General,
    Center,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Center,
}

/// Presentation of a single cell. `None` means the spreadsheet default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub bold: bool,
    pub font_size: Option<f64>,
    pub font_color: Option<u32>,
    pub fill: Option<u32>,
    pub border: bool,
    pub wrap: bool,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

impl Default for CellStyle {
    /// Thin border, wrapped, top-aligned: the base every cell starts from.
    fn default() -> Self {
        Self {
            bold: false,
            font_size: None,
            font_color: None,
            fill: None,
            border: true,
            wrap: true,
            h_align: HAlign::General,
            v_align: VAlign::Top,
        }
    }
}

impl CellStyle {
    /// Merged page title: large white bold text on the dark banner fill.
    pub fn title_banner(font_size: f64) -> Self {
        Self {
            bold: true,
            font_size: Some(font_size),
            font_color: Some(WHITE),
            fill: Some(HEADER_FILL),
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            ..Self::default()
        }
    }

    /// Matrix header row ("Workstream" and the stage names).
    pub fn header() -> Self {
        Self {
            bold: true,
            font_color: Some(WHITE),
            fill: Some(WORKSTREAM_FILL),
            h_align: HAlign::Center,
            v_align: VAlign::Center,
            ..Self::default()
        }
    }

    pub fn workstream_name() -> Self {
        Self {
            bold: true,
            font_size: Some(11.0),
            ..Self::default()
        }
    }

    /// Stage text cell, tinted by 1-based stage index.
    pub fn stage_text(stage: usize) -> Self {
        Self {
            font_size: Some(10.0),
            fill: stage_fill(stage),
            ..Self::default()
        }
    }

    /// Stage name on the summary page.
    pub fn stage_name() -> Self {
        Self {
            bold: true,
            font_color: Some(WHITE),
            fill: Some(WORKSTREAM_FILL),
            ..Self::default()
        }
    }

    pub fn stage_description() -> Self {
        Self::default()
    }
}

/// Background tint for a 1-based stage index; `None` outside 1..=5.
pub fn stage_fill(stage: usize) -> Option<u32> {
    stage
        .checked_sub(1)
        .and_then(|idx| STAGE_FILLS.get(idx))
        .copied()
}
