//! Spreadsheet file formats accepted for input and produced as output

use std::fmt;
use std::path::Path;

/// File extensions (lowercase, without the dot) accepted as spreadsheet files.
pub const VALID_EXTENSIONS: [&str; 7] = ["xlsx", "xls", "xlsm", "xlsb", "odf", "ods", "odt"];

/// A recognized spreadsheet container, identified by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetFormat {
    Xlsx,
    Xls,
    Xlsm,
    Xlsb,
    Odf,
    Ods,
    Odt,
}

/// Group of formats that share a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    /// Excel workbooks: written as an Office Open XML package
    OfficeOpenXml,
    /// OpenDocument files: written as an ODS package
    OpenDocument,
}

impl SpreadsheetFormat {
    /// Classify an extension string (with or without a leading dot, any case).
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            "xlsm" => Some(Self::Xlsm),
            "xlsb" => Some(Self::Xlsb),
            "odf" => Some(Self::Odf),
            "ods" => Some(Self::Ods),
            "odt" => Some(Self::Odt),
            _ => None,
        }
    }

    /// Classify a path by its final extension. Paths without one are not spreadsheets.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn family(self) -> FormatFamily {
        match self {
            Self::Xlsx | Self::Xls | Self::Xlsm | Self::Xlsb => FormatFamily::OfficeOpenXml,
            Self::Odf | Self::Ods | Self::Odt => FormatFamily::OpenDocument,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
            Self::Xlsm => "xlsm",
            Self::Xlsb => "xlsb",
            Self::Odf => "odf",
            Self::Ods => "ods",
            Self::Odt => "odt",
        }
    }
}

impl fmt::Display for SpreadsheetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Extension of `path` as the user wrote it, with its leading dot, or an empty string.
pub fn display_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}
