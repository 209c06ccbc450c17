//! Convert command: runs one conversion and reports the outcome

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::pipeline::{convert, ConvertError};
use crate::utils::{print_failure, print_success, success_message, FAILURE_MESSAGE};

/// Run the conversion and report it on the log stream and the console.
///
/// # Arguments
/// * `input` - Path to the input spreadsheet
/// * `output` - Optional output path. If not provided, uses the input path with a
///   `_processed` suffix
///
/// The failure reason is logged at error level, or warning level for a sheet
/// with too few columns; the console only gets the generic failure line. The
/// result is handed back so the caller can pick the exit code.
pub fn run_convert(input: &Path, output: Option<&Path>) -> Result<PathBuf, ConvertError> {
    match convert(input, output) {
        Ok(path) => {
            info!("{}", success_message(&path));
            print_success(&path);
            Ok(path)
        }
        Err(err) => {
            if err.is_warning() {
                warn!(kind = %err.kind(), "{}", err);
            } else {
                error!(kind = %err.kind(), "{}", err);
            }
            error!("{}", FAILURE_MESSAGE);
            print_failure();
            Err(err)
        }
    }
}
