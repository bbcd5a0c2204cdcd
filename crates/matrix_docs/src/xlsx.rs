use std::path::Path;

use anyhow::{Context, Result};
use matrix_core::MatrixError;
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
    XlsxError,
};
use tracing::{debug, info};

use crate::document::{Document, Page};
use crate::style::{CellStyle, HAlign, VAlign};

/// Render the document to XLSX bytes, one worksheet per page.
pub fn render_xlsx(document: &Document) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(document)?;

    let bytes = workbook
        .save_to_buffer()
        .map_err(|e| render_error(e, None))
        .context("Failed to save workbook to buffer")?;

    Ok(bytes)
}

/// Render the document and write it to `path`, replacing any existing file.
pub fn write_xlsx(document: &Document, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(document)?;

    workbook
        .save(path)
        .map_err(|e| render_error(e, Some(path)))
        .context("Failed to write workbook")?;

    info!("Wrote {} page(s) to {}", document.pages.len(), path.display());
    Ok(())
}

fn build_workbook(document: &Document) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    // Pin the creation time so repeated runs produce the same package.
    let created = ExcelDateTime::from_ymd(2024, 1, 1).map_err(|e| render_error(e, None))?;
    let properties = DocProperties::new()
        .set_title("Lead Management Maturity Matrix")
        .set_subject("Maturity stages by workstream")
        .set_creation_datetime(&created);
    workbook.set_properties(&properties);

    for page in &document.pages {
        let worksheet = workbook.add_worksheet();
        write_page(worksheet, page)
            .map_err(|e| render_error(e, None))
            .with_context(|| format!("Failed to write sheet: {}", page.name))?;
        debug!("Rendered sheet '{}'", page.name);
    }

    Ok(workbook)
}

fn write_page(worksheet: &mut Worksheet, page: &Page) -> Result<(), XlsxError> {
    worksheet.set_name(&page.name)?;

    for (col, width) in &page.column_widths {
        worksheet.set_column_width(*col, *width)?;
    }
    for (row, height) in &page.row_heights {
        worksheet.set_row_height(*row, *height)?;
    }

    // Merged ranges carry their anchor cell's value and format.
    for merge in &page.merges {
        let (value, style) = page
            .cell(merge.first_row, merge.first_col)
            .map(|c| (c.value.as_str(), c.style))
            .unwrap_or(("", CellStyle::default()));
        worksheet.merge_range(
            merge.first_row,
            merge.first_col,
            merge.last_row,
            merge.last_col,
            value,
            &to_format(&style),
        )?;
    }

    for cell in &page.cells {
        if page.merges.iter().any(|m| m.contains(cell.row, cell.col)) {
            continue;
        }
        worksheet.write_string_with_format(cell.row, cell.col, &cell.value, &to_format(&cell.style))?;
    }

    Ok(())
}

fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();
    if style.bold {
        format = format.set_bold();
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(color);
    }
    if let Some(fill) = style.fill {
        format = format.set_background_color(fill);
    }
    if style.border {
        format = format.set_border(FormatBorder::Thin);
    }
    if style.wrap {
        format = format.set_text_wrap();
    }
    format = match style.h_align {
        HAlign::General => format,
        HAlign::Center => format.set_align(FormatAlign::Center),
    };
    match style.v_align {
        VAlign::Top => format.set_align(FormatAlign::Top),
        VAlign::Center => format.set_align(FormatAlign::VerticalCenter),
    }
}

/// I/O failures become `FileSystem` errors naming the path; anything else
/// the serializer reports is a `Render` error.
fn render_error(err: XlsxError, path: Option<&Path>) -> MatrixError {
    match (err, path) {
        (XlsxError::IoError(io), Some(path)) => {
            MatrixError::FileSystem(format!("{}: {io}", path.display()))
        }
        (XlsxError::IoError(io), None) => MatrixError::FileSystem(io.to_string()),
        (other, _) => MatrixError::Render(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::build_matrix_document;
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> Option<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).ok()?;
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        Some(content)
    }

    #[test]
    fn test_render_xlsx_is_zip_package() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();
        // XLSX files start with PK (zip format)
        assert!(bytes.len() > 1000);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_xlsx_has_exactly_two_named_sheets() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();

        let workbook_xml = read_part(&bytes, "xl/workbook.xml").unwrap();
        assert!(workbook_xml.contains(r#"name="Maturity Matrix""#));
        assert!(workbook_xml.contains(r#"name="Stage Descriptions""#));

        assert!(read_part(&bytes, "xl/worksheets/sheet1.xml").is_some());
        assert!(read_part(&bytes, "xl/worksheets/sheet2.xml").is_some());
        assert!(read_part(&bytes, "xl/worksheets/sheet3.xml").is_none());
    }

    #[test]
    fn test_render_xlsx_merges_title_banners() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();

        let matrix = read_part(&bytes, "xl/worksheets/sheet1.xml").unwrap();
        assert!(matrix.contains(r#"<mergeCell ref="A1:F1"/>"#));

        let summary = read_part(&bytes, "xl/worksheets/sheet2.xml").unwrap();
        assert!(summary.contains(r#"<mergeCell ref="A1:B1"/>"#));
    }

    #[test]
    fn test_render_xlsx_contains_literal_text() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();
        let strings = read_part(&bytes, "xl/sharedStrings.xml").unwrap();

        for expected in [
            "Lead Management Maturity Matrix",
            "Maturity Stage Descriptions",
            "Workstream",
            "Stage 5: Self-Optimizing",
            "2. Lead Creation",
            "Basic trigger library",
        ] {
            assert!(strings.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_render_xlsx_is_deterministic() {
        let doc = build_matrix_document();
        let first = render_xlsx(&doc).unwrap();
        let second = render_xlsx(&doc).unwrap();

        for part in [
            "xl/sharedStrings.xml",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
            "xl/worksheets/sheet2.xml",
            "docProps/core.xml",
        ] {
            assert_eq!(read_part(&first, part), read_part(&second, part), "{part}");
        }
    }

    #[test]
    fn test_write_xlsx_creates_then_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("matrix.xlsx");
        let doc = build_matrix_document();

        assert!(!path.exists());
        write_xlsx(&doc, &path).unwrap();
        assert!(path.exists());

        write_xlsx(&doc, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_write_xlsx_missing_directory_is_file_system_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no_such_dir").join("matrix.xlsx");

        let err = write_xlsx(&build_matrix_document(), &path).unwrap_err();
        let matrix_err = err.downcast_ref::<MatrixError>().unwrap();
        assert!(matches!(matrix_err, MatrixError::FileSystem(_)));
        assert!(matrix_err.to_string().contains("matrix.xlsx"));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_xlsx_error_chain_names_path_once() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("no_such_dir").join("matrix.xlsx");

        let err = write_xlsx(&build_matrix_document(), &path).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.starts_with("Failed to write workbook"), "{chain}");
        assert_eq!(chain.matches("matrix.xlsx").count(), 1, "{chain}");
    }

    fn row_tag(sheet: &str, row: u32) -> &str {
        let start = sheet
            .find(&format!("<row r=\"{row}\" "))
            .unwrap_or_else(|| panic!("row {row} missing"));
        let end = start + sheet[start..].find('>').unwrap();
        &sheet[start..=end]
    }

    #[test]
    fn test_render_xlsx_styles_fills_fonts_and_alignment() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();
        let styles = read_part(&bytes, "xl/styles.xml").unwrap();

        for fill in ["FF1F4E78", "FF4472C4", "FFF2F2F2", "FFE7E6E6", "FFD9E1F2", "FFC5E0B4", "FFA9D18E"] {
            assert!(styles.contains(&format!(r#"<fgColor rgb="{fill}"/>"#)), "missing fill {fill}");
        }
        assert!(!styles.contains(r#"<fgColor rgb="FF000000"/>"#));

        assert!(styles.contains("<b/>"));
        assert!(styles.contains(r#"<color rgb="FFFFFFFF"/>"#));
        assert!(styles.contains(r#"<sz val="16"/>"#));
        assert!(styles.contains(r#"<sz val="14"/>"#));
        assert!(styles.contains(r#"<sz val="10"/>"#));

        assert!(styles.contains(r#"vertical="top" wrapText="1""#));
        assert!(styles.contains(r#"horizontal="center""#));
        assert!(styles.contains(r#"vertical="center""#));
        assert!(!styles.contains(r#"vertical="bottom""#));
        assert!(styles.contains(r#"<left style="thin">"#));
    }

    #[test]
    fn test_render_xlsx_matrix_widths_and_heights() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml").unwrap();

        assert!(sheet.contains(r#"<col min="1" max="1" width="30.7109375""#));
        assert!(sheet.contains(r#"<col min="2" max="6" width="45.7109375""#));

        assert!(row_tag(&sheet, 1).contains(r#"ht="30""#));
        assert!(row_tag(&sheet, 2).contains(r#"ht="40""#));
        for row in 3..=7 {
            assert!(row_tag(&sheet, row).contains(r#"ht="150""#), "row {row}");
        }
    }

    #[test]
    fn test_render_xlsx_summary_widths_and_heights() {
        let bytes = render_xlsx(&build_matrix_document()).unwrap();
        let sheet = read_part(&bytes, "xl/worksheets/sheet2.xml").unwrap();

        assert!(sheet.contains(r#"<col min="1" max="1" width="25.7109375""#));
        assert!(sheet.contains(r#"<col min="2" max="2" width="80.7109375""#));

        assert!(row_tag(&sheet, 1).contains(r#"ht="25""#));
        for row in 3..=7 {
            assert!(row_tag(&sheet, row).contains(r#"ht="60""#), "row {row}");
        }
    }

    #[test]
    fn test_to_format_applies_every_style_field() {
        // Distinct styles must not collapse to the same format.
        let banner = to_format(&CellStyle::title_banner(16.0));
        let header = to_format(&CellStyle::header());
        let plain = to_format(&CellStyle::stage_description());
        assert_ne!(banner, header);
        assert_ne!(header, plain);
        assert_eq!(plain, to_format(&CellStyle::default()));
    }
}
