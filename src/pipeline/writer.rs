//! Spreadsheet writer: saves a DataFrame as a single-sheet workbook
//!
//! The output extension picks the container family. Headers go in the first row
//! and data starts on the second; no index column is written.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use spreadsheet_ods::{Sheet, WorkBook};
use tracing::debug;

use super::format::{display_extension, FormatFamily, SpreadsheetFormat};

/// Name given to the only sheet of every output workbook.
pub const SHEET_NAME: &str = "Sheet1";

/// Number format applied to date-time cells in Office Open XML output.
pub const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A DataFrame value reduced to what a spreadsheet cell can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Bool(bool),
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn from_any_value(value: &AnyValue) -> Self {
        match value {
            AnyValue::Null => CellValue::Blank,
            AnyValue::Boolean(b) => CellValue::Bool(*b),
            AnyValue::String(s) => CellValue::Text(s.to_string()),
            AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
            AnyValue::Datetime(v, unit, _) => match datetime_from_timestamp(*v, *unit) {
                Some(dt) => CellValue::DateTime(dt),
                None => CellValue::Blank,
            },
            v if v.dtype().is_integer() || v.dtype().is_float() => {
                match v.extract::<f64>() {
                    Some(f) if f.is_finite() => CellValue::Number(f),
                    _ => CellValue::Blank,
                }
            }
            other => CellValue::Text(other.to_string()),
        }
    }
}

/// Write `df` to `path` in the spreadsheet family named by the path's extension.
pub fn write_spreadsheet(df: &DataFrame, path: &Path) -> Result<()> {
    let format = SpreadsheetFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "No spreadsheet writer for output file type '{}'",
            display_extension(path)
        )
    })?;

    let columns = cell_columns(df)?;
    debug!(
        format = %format,
        columns = columns.len(),
        rows = df.height(),
        "Writing spreadsheet"
    );

    match format.family() {
        FormatFamily::OfficeOpenXml => write_office_open_xml(&columns, path),
        FormatFamily::OpenDocument => write_open_document(&columns, path),
    }
}

/// Column name paired with its cells, top to bottom.
type CellColumn = (String, Vec<CellValue>);

fn cell_columns(df: &DataFrame) -> Result<Vec<CellColumn>> {
    df.get_columns()
        .iter()
        .map(|column| {
            let cells = (0..column.len())
                .map(|idx| column.get(idx).map(|v| CellValue::from_any_value(&v)))
                .collect::<PolarsResult<Vec<_>>>()
                .with_context(|| format!("Failed to read values of column '{}'", column.name()))?;
            Ok((column.name().to_string(), cells))
        })
        .collect()
}

fn write_office_open_xml(columns: &[CellColumn], path: &Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    for (col_idx, (name, cells)) in columns.iter().enumerate() {
        // umya coordinates are 1-based (column, row)
        let col = sheet_index(col_idx + 1)?;
        sheet.get_cell_mut((col, 1)).set_value_string(name.as_str());

        for (row_idx, value) in cells.iter().enumerate() {
            let row = sheet_index(row_idx + 2)?;
            match value {
                CellValue::Blank => {}
                CellValue::Bool(b) => {
                    sheet.get_cell_mut((col, row)).set_value_bool(*b);
                }
                CellValue::Number(n) => {
                    sheet.get_cell_mut((col, row)).set_value_number(*n);
                }
                CellValue::Text(s) => {
                    sheet.get_cell_mut((col, row)).set_value_string(s.as_str());
                }
                CellValue::DateTime(dt) => {
                    let serial = excel_serial(*dt)
                        .ok_or_else(|| anyhow!("Date {} is outside the spreadsheet range", dt))?;
                    let cell = sheet.get_cell_mut((col, row));
                    cell.set_value_number(serial);
                    cell.get_style_mut()
                        .get_number_format_mut()
                        .set_format_code(DATETIME_FORMAT);
                }
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .with_context(|| format!("Failed to write workbook: {}", path.display()))
}

fn write_open_document(columns: &[CellColumn], path: &Path) -> Result<()> {
    let mut book = WorkBook::new_empty();
    let mut sheet = Sheet::new(SHEET_NAME);

    for (col_idx, (name, cells)) in columns.iter().enumerate() {
        let col = sheet_index(col_idx)?;
        sheet.set_value(0, col, name.as_str());

        for (row_idx, value) in cells.iter().enumerate() {
            let row = sheet_index(row_idx + 1)?;
            match value {
                CellValue::Blank => {}
                CellValue::Bool(b) => {
                    sheet.set_value(row, col, *b);
                }
                CellValue::Number(n) => {
                    sheet.set_value(row, col, *n);
                }
                CellValue::Text(s) => {
                    sheet.set_value(row, col, s.as_str());
                }
                CellValue::DateTime(dt) => {
                    sheet.set_value(row, col, *dt);
                }
            }
        }
    }

    book.push_sheet(sheet);
    spreadsheet_ods::write_ods(&mut book, path)
        .with_context(|| format!("Failed to write OpenDocument file: {}", path.display()))
}

fn sheet_index(idx: usize) -> Result<u32> {
    u32::try_from(idx).map_err(|_| anyhow!("Index {} exceeds spreadsheet limits", idx))
}

fn datetime_from_timestamp(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let millis = match unit {
        TimeUnit::Nanoseconds => value.div_euclid(1_000_000),
        TimeUnit::Microseconds => value.div_euclid(1_000),
        TimeUnit::Milliseconds => value,
    };
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Days since 1899-12-30, the epoch of Excel's 1900 date system.
fn excel_serial(dt: NaiveDateTime) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let millis = (dt - epoch).num_milliseconds();
    Some(millis as f64 / MILLIS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_serial_matches_known_dates() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(excel_serial(dt), Some(45292.0));

        let noon = NaiveDate::from_ymd_opt(1900, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(excel_serial(noon), Some(61.5));
    }

    #[test]
    fn test_timestamp_units() {
        let expected = NaiveDate::from_ymd_opt(1970, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(
            datetime_from_timestamp(86_400_000, TimeUnit::Milliseconds),
            Some(expected)
        );
        assert_eq!(
            datetime_from_timestamp(86_400_000_000, TimeUnit::Microseconds),
            Some(expected)
        );
        assert_eq!(
            datetime_from_timestamp(86_400_000_000_000, TimeUnit::Nanoseconds),
            Some(expected)
        );
    }

    #[test]
    fn test_cell_values_from_dataframe() {
        let df = df! {
            "title" => [Some("Dune"), None],
            "year" => [Some(1965i64), None],
            "price" => [9.5f64, f64::NAN],
            "in_print" => [true, false],
        }
        .unwrap();

        let columns = cell_columns(&df).unwrap();

        assert_eq!(columns[0].0, "title");
        assert_eq!(
            columns[0].1,
            vec![CellValue::Text("Dune".to_string()), CellValue::Blank]
        );
        assert_eq!(columns[1].1, vec![CellValue::Number(1965.0), CellValue::Blank]);
        assert_eq!(columns[2].1, vec![CellValue::Number(9.5), CellValue::Blank]);
        assert_eq!(
            columns[3].1,
            vec![CellValue::Bool(true), CellValue::Bool(false)]
        );
    }

    #[test]
    fn test_rejects_unknown_output_extension() {
        let df = df! { "a" => [1i64] }.unwrap();
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        let err = write_spreadsheet(&df, &path).unwrap_err();

        assert!(err.to_string().contains(".csv"), "{}", err);
        assert!(!path.exists());
    }
}
