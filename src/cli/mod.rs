//! CLI module - argument parsing, the convert command and the process outcome

mod args;
pub mod convert;
pub mod outcome;

pub use args::Cli;
pub use convert::run_convert;
pub use outcome::{catch_unexpected, finish, report_argument_error, run};
