//! Dataset loader for spreadsheet files
//!
//! The workbook is opened from its bytes so that the container is detected by
//! content rather than by extension. Only the first sheet is read; its first
//! row supplies the column names.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;
use tracing::debug;

static EMPTY_CELL: Data = Data::Empty;

/// Largest magnitude at which every integral f64 is exactly representable as i64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Load the first sheet of a spreadsheet file into a DataFrame.
pub fn load_spreadsheet(path: &Path) -> Result<DataFrame> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_count = workbook.sheet_names().len();
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("Workbook contains no sheets"))?
        .context("Failed to read the first sheet")?;
    debug!(sheets = sheet_count, "Read first sheet of workbook");

    range_to_dataframe(&range)
}

/// Convert a sheet range into a DataFrame, using the first row as the header.
///
/// Columns are counted from column A of the sheet, so blank columns left of the
/// used range become empty `Unnamed: <i>` columns. Leading blank rows are skipped.
/// An empty range produces a DataFrame without columns.
pub fn range_to_dataframe(range: &Range<Data>) -> Result<DataFrame> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(DataFrame::empty());
    };

    let offset = range.start().map_or(0, |(_, col)| col as usize);
    let padded_header: Vec<Data> = std::iter::repeat(Data::Empty)
        .take(offset)
        .chain(header.iter().cloned())
        .collect();

    let names = header_names(&padded_header);
    let data_rows: Vec<&[Data]> = rows.collect();

    let columns = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells: Vec<&Data> = data_rows
                .iter()
                .map(|row| {
                    idx.checked_sub(offset)
                        .and_then(|i| row.get(i))
                        .unwrap_or(&EMPTY_CELL)
                })
                .collect();
            build_column(name, &cells)
        })
        .collect::<Result<Vec<_>>>()?;

    DataFrame::new(columns).context("Failed to assemble dataset from sheet")
}

/// Derive unique column names from the header row.
///
/// Blank headers become `Unnamed: <position>`; a repeated name gets `.1`, `.2`, ...
/// appended to each later occurrence.
pub fn header_names(header: &[Data]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(header.len());
    let mut counts: HashMap<String, usize> = HashMap::new();

    for (idx, cell) in header.iter().enumerate() {
        let base = match cell_text(cell) {
            Some(text) if !text.is_empty() => text,
            _ => format!("Unnamed: {}", idx),
        };

        let mut count = counts.get(&base).copied().unwrap_or(0);
        let mut name = base.clone();
        while names.contains(&name) {
            count += 1;
            name = format!("{}.{}", base, count);
        }
        counts.insert(base, count);
        names.push(name);
    }

    names
}

/// Type a column takes on, decided from its non-empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Int,
    Float,
    Bool,
    DateTime,
    Text,
}

impl CellKind {
    fn of(cell: &Data) -> Option<Self> {
        match cell {
            Data::Empty => None,
            Data::Int(_) => Some(CellKind::Int),
            Data::Float(f) if is_integral(*f) => Some(CellKind::Int),
            Data::Float(_) => Some(CellKind::Float),
            Data::Bool(_) => Some(CellKind::Bool),
            Data::DateTime(dt) if dt.is_duration() => Some(CellKind::Float),
            Data::DateTime(_) => Some(CellKind::DateTime),
            Data::DateTimeIso(s) if parse_iso_datetime(s).is_some() => Some(CellKind::DateTime),
            Data::DateTimeIso(_) | Data::DurationIso(_) | Data::String(_) | Data::Error(_) => {
                Some(CellKind::Text)
            }
        }
    }

    fn merge(self, other: CellKind) -> CellKind {
        match (self, other) {
            (a, b) if a == b => a,
            (CellKind::Int, CellKind::Float) | (CellKind::Float, CellKind::Int) => CellKind::Float,
            _ => CellKind::Text,
        }
    }
}

/// Infer the column type. `None` means every cell is empty.
pub fn infer_column_kind(cells: &[&Data]) -> Option<CellKind> {
    cells
        .iter()
        .filter_map(|cell| CellKind::of(cell))
        .reduce(CellKind::merge)
}

fn build_column(name: String, cells: &[&Data]) -> Result<Column> {
    let kind = infer_column_kind(cells);
    debug!(column = %name, kind = ?kind, "Inferred column type");

    let name = PlSmallStr::from(name);
    let column = match kind {
        None => Column::new(name, vec![None::<f64>; cells.len()]),
        Some(CellKind::Int) => {
            let values: Vec<Option<i64>> = cells.iter().map(|c| cell_i64(c)).collect();
            Column::new(name, values)
        }
        Some(CellKind::Float) => {
            let values: Vec<Option<f64>> = cells.iter().map(|c| cell_f64(c)).collect();
            Column::new(name, values)
        }
        Some(CellKind::Bool) => {
            let values: Vec<Option<bool>> = cells
                .iter()
                .map(|c| match c {
                    Data::Bool(b) => Some(*b),
                    _ => None,
                })
                .collect();
            Column::new(name, values)
        }
        Some(CellKind::DateTime) => {
            let millis: Vec<Option<i64>> = cells
                .iter()
                .map(|c| cell_datetime(c).map(|dt| dt.and_utc().timestamp_millis()))
                .collect();
            Column::new(name, millis)
                .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
                .context("Failed to build date-time column")?
        }
        Some(CellKind::Text) => {
            let values: Vec<Option<String>> = cells.iter().map(|c| cell_text(c)).collect();
            Column::new(name, values)
        }
    };

    Ok(column)
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER
}

fn cell_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::Float(f) if is_integral(*f) => Some(*f as i64),
        _ => None,
    }
}

fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::DateTime(dt) => Some(dt.as_f64()),
        _ => None,
    }
}

fn cell_datetime(cell: &Data) -> Option<NaiveDateTime> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime(),
        Data::DateTimeIso(s) => parse_iso_datetime(s),
        _ => None,
    }
}

/// Parse the ISO 8601 forms OpenDocument uses for date and date-time cells.
fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Render a cell as text; `None` for empty cells.
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if is_integral(*f) => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) if !dt.is_duration() => naive.to_string(),
            _ => dt.as_f64().to_string(),
        },
        Data::Error(e) => e.to_string(),
    };
    Some(text)
}
