//! colpick: Spreadsheet Column Extraction CLI
//!
//! Copies the first three columns of a spreadsheet into a new file.
//! Exit code 0 on success, 1 on any failure.

use std::process::ExitCode;

use clap::Parser;

use colpick::cli::{finish, report_argument_error, run, Cli};
use colpick::utils::init_logging;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            init_logging();
            report_argument_error(&e);
            return ExitCode::FAILURE;
        }
    };
    init_logging();

    if finish(run(&cli)) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
