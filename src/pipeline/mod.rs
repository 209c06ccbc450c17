//! Pipeline module - validate, load, select and write

pub mod converter;
pub mod error;
pub mod format;
pub mod loader;
pub mod select;
pub mod writer;

pub use converter::*;
pub use error::*;
pub use format::*;
pub use loader::*;
pub use select::*;
pub use writer::*;
