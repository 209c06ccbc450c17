//! The conversion itself: validate, read, keep the leading columns, write

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::ConvertError;
use super::format::{display_extension, SpreadsheetFormat};
use super::loader::load_spreadsheet;
use super::select::{select_leading_columns, REQUIRED_COLUMNS};
use super::writer::write_spreadsheet;

/// Suffix appended to the input file stem when no output path is given.
pub const PROCESSED_SUFFIX: &str = "_processed";

/// Copy the first three columns of the spreadsheet at `input` into a new file.
///
/// # Arguments
/// * `input` - Path to an existing spreadsheet file
/// * `output` - Optional output path. If not provided, uses the input path with
///   `_processed` inserted before the extension
///
/// # Returns
/// The path of the written file.
///
/// Checks run in order and the first failure ends the conversion: the input must
/// be a regular file, its extension must be a spreadsheet extension, the first
/// sheet must load and hold at least three columns, and the output must be
/// written. Nothing is written unless all of the earlier checks pass.
pub fn convert(input: &Path, output: Option<&Path>) -> Result<PathBuf, ConvertError> {
    if !input.is_file() {
        return Err(ConvertError::NotFound {
            path: input.to_path_buf(),
        });
    }

    if SpreadsheetFormat::from_path(input).is_none() {
        return Err(ConvertError::UnsupportedFormat {
            extension: display_extension(input),
        });
    }

    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input),
    };

    info!("Reading Excel file: {}", input.display());
    let df = load_spreadsheet(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let selected = select_leading_columns(&df, REQUIRED_COLUMNS)?;

    let names: Vec<&str> = selected
        .get_column_names()
        .iter()
        .map(|s| s.as_str())
        .collect();
    info!("Extracted first three columns: {:?}", names);

    write_spreadsheet(&selected, &output_path).map_err(|source| ConvertError::Write {
        path: output_path.clone(),
        source,
    })?;

    info!("Successfully created output file: {}", output_path.display());
    Ok(output_path)
}

/// Derive the default output path: same directory and stem, `_processed` suffix,
/// original extension (including its case).
///
/// A path without an extension just gets the suffix.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut file_name: OsString = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    file_name.push(PROCESSED_SUFFIX);
    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }
    input.with_file_name(file_name)
}
