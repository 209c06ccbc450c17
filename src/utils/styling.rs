//! Terminal styling for the final status line

use std::path::Path;

use console::style;

/// Printed after a failed conversion; the log carries the reason.
pub const FAILURE_MESSAGE: &str = "Failed to process Excel file. Check the logs for details.";

/// Usage line shown when the input argument is missing.
pub const USAGE: &str = "Usage: colpick <input_excel_file> [output_excel_file]";

/// Message printed after a successful conversion.
pub fn success_message(output: &Path) -> String {
    format!(
        "Successfully processed file. Output saved to: {}",
        output.display()
    )
}

/// Print the success line
pub fn print_success(output: &Path) {
    println!("{}", style(success_message(output)).green().bold());
}

/// Print the generic failure line
pub fn print_failure() {
    println!("{}", style(FAILURE_MESSAGE).red().bold());
}

/// Print the usage hint
pub fn print_usage() {
    println!("{}", style(USAGE).dim());
}
