//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};
use spreadsheet_ods::{Sheet, WorkBook};
use tempfile::TempDir;

/// Header and rows of the books fixture: four columns, five data rows.
pub fn books_rows() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Title", "Author", "Year", "Publisher"],
        vec!["Dune", "Frank Herbert", "1965", "Chilton"],
        vec!["Emma", "Jane Austen", "1815", "John Murray"],
        vec!["Beloved", "Toni Morrison", "1987", "Knopf"],
        vec!["Ulysses", "James Joyce", "1922", "Shakespeare and Company"],
        vec!["Dracula", "Bram Stoker", "1897", "Archibald Constable"],
    ]
}

/// Write rows to an xlsx file with umya-spreadsheet.
///
/// Each string becomes a number if it parses as one, a blank if empty, text otherwise.
pub fn write_xlsx(path: &Path, rows: &[Vec<&str>]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let coord = (c as u32 + 1, r as u32 + 1);
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(n) => {
                    sheet.get_cell_mut(coord).set_value_number(n);
                }
                Err(_) => {
                    sheet.get_cell_mut(coord).set_value_string(*value);
                }
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

/// Write rows to an ods file with spreadsheet-ods, using the same cell rules as `write_xlsx`.
pub fn write_ods(path: &Path, rows: &[Vec<&str>]) {
    let mut book = WorkBook::new_empty();
    let mut sheet = Sheet::new("Sheet1");

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(n) => {
                    sheet.set_value(r as u32, c as u32, n);
                }
                Err(_) => {
                    sheet.set_value(r as u32, c as u32, *value);
                }
            }
        }
    }

    book.push_sheet(sheet);
    spreadsheet_ods::write_ods(&mut book, path).unwrap();
}

/// Create a temporary directory holding `name` written from `rows`.
pub fn create_temp_xlsx(name: &str, rows: &[Vec<&str>]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    write_xlsx(&path, rows);
    (temp_dir, path)
}

/// Read every cell of the first sheet as text, with calamine, bypassing the crate's loader.
pub fn read_sheet_text(path: &Path) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    range
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
                    other => other.to_string(),
                })
                .collect()
        })
        .collect()
}

/// The first `count` columns of `rows`, as owned strings.
pub fn leading_columns(rows: &[Vec<&str>], count: usize) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().take(count).map(|s| s.to_string()).collect())
        .collect()
}

/// Column names of the first sheet as loaded by the crate, in sheet order.
pub fn get_column_names(path: &Path) -> Vec<String> {
    colpick::pipeline::load_spreadsheet(path)
        .unwrap()
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect()
}
