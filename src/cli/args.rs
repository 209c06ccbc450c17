//! Command-line argument definitions using clap

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::pipeline::default_output_path;

/// colpick - Copy the first three columns of a spreadsheet into a new file
#[derive(Parser, Debug)]
#[command(name = "colpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input spreadsheet (.xlsx, .xls, .xlsm, .xlsb, .odf, .ods or .odt)
    pub input: Option<PathBuf>,

    /// Output spreadsheet path; the extension picks the output format.
    /// Defaults to the input directory with a '_processed' suffix
    /// (e.g., data/report.xlsx -> data/report_processed.xlsx).
    pub output: Option<PathBuf>,

    /// Arguments after the output path are ignored.
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true)]
    pub extra: Vec<OsString>,
}

impl Cli {
    /// Get the input path. Optional at parse time so a missing input can be
    /// reported with the usage line and exit code 1.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| default_output_path(input)),
        )
    }
}
