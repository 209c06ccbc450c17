//! Process outcome: the top-level run, caught panics and argument errors
//!
//! Everything here ends in the same failure exit; only the log record differs.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use anyhow::{anyhow, Result};
use tracing::{error, info};

use super::{run_convert, Cli};
use crate::pipeline::FailureKind;
use crate::utils::{print_failure, print_usage, USAGE};

/// Run the conversion the arguments describe.
///
/// Returns whether it succeeded. `Err` is reserved for failures outside the
/// conversion's own error handling, such as a panic inside a spreadsheet library.
pub fn run(cli: &Cli) -> Result<bool> {
    let Some(input) = cli.input() else {
        error!("Missing required arguments");
        info!("{}", USAGE);
        print_usage();
        return Ok(false);
    };
    let output = cli.output.as_deref();

    catch_unexpected(|| run_convert(input, output).is_ok())
}

/// Run `f`, turning a panic into an error that carries the panic message.
pub fn catch_unexpected<F>(f: F) -> Result<bool>
where
    F: FnOnce() -> bool + UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| anyhow!("panic: {}", panic_message(payload.as_ref())))
}

/// Log an unexpected error if there is one. Returns whether the run succeeded.
pub fn finish(outcome: Result<bool>) -> bool {
    match outcome {
        Ok(succeeded) => succeeded,
        Err(e) => {
            error!(
                kind = %FailureKind::UnexpectedError,
                "Unexpected error in main execution: {:#}", e
            );
            print_failure();
            false
        }
    }
}

/// Report arguments clap rejected (unknown flags and the like) with the usage line.
pub fn report_argument_error(err: &clap::Error) {
    let reason = err.to_string();
    error!(
        "Invalid arguments: {}",
        reason.lines().next().unwrap_or_default()
    );
    info!("{}", USAGE);
    print_usage();
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
