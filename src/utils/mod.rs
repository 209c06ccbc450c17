//! Utilities - logging setup and console output

pub mod logging;
pub mod styling;

pub use logging::*;
pub use styling::*;
