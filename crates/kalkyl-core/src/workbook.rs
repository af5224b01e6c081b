use crate::error::KalkylError;
use crate::model::{Cell, Table};
use rust_xlsxwriter::Workbook;

/// MIME type of the produced artifact.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Default filename for the produced artifact.
pub const DEFAULT_OUTPUT_NAME: &str = "extracted_data.xlsx";

/// Name of the sheet holding the extracted text.
pub const TEXT_SHEET_NAME: &str = "Extracted Text";

/// Serialize the extracted text and tables into one xlsx document.
///
/// Sheet layout: "Extracted Text" first, with the column label in A1
/// and one text line per row below it, then one "Table_<n>" sheet per
/// table (1-based, in sequence order) with its header row and data
/// rows. With no tables, only the text sheet is written.
pub fn write_workbook(text: &str, tables: &[Table]) -> Result<Vec<u8>, KalkylError> {
    let mut workbook = Workbook::new();

    let sheet = workbook
        .add_worksheet()
        .set_name(TEXT_SHEET_NAME)
        .map_err(|e| KalkylError::Workbook(e.to_string()))?;
    sheet
        .write_string(0, 0, TEXT_SHEET_NAME)
        .map_err(|e| KalkylError::Workbook(e.to_string()))?;
    for (i, line) in text.split('\n').enumerate() {
        sheet
            .write_string((i + 1) as u32, 0, line)
            .map_err(|e| KalkylError::Workbook(e.to_string()))?;
    }

    for (i, table) in tables.iter().enumerate() {
        let sheet = workbook
            .add_worksheet()
            .set_name(format!("Table_{}", i + 1))
            .map_err(|e| KalkylError::Workbook(e.to_string()))?;

        for (col, header) in table.headers.iter().enumerate() {
            sheet
                .write_string(0, col as u16, header)
                .map_err(|e| KalkylError::Workbook(e.to_string()))?;
        }

        for (row, cells) in table.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let (r, c) = ((row + 1) as u32, col as u16);
                match cell {
                    Cell::Text(s) => sheet.write_string(r, c, s),
                    Cell::Number(n) => sheet.write_number(r, c, *n),
                    Cell::Empty => continue,
                }
                .map_err(|e| KalkylError::Workbook(e.to_string()))?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| KalkylError::Workbook(e.to_string()))
}
