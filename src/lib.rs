//! colpick: Spreadsheet Column Extraction Library
//!
//! Reads the first sheet of a spreadsheet, keeps its first three columns by
//! position and writes them to a new spreadsheet file.

pub mod cli;
pub mod pipeline;
pub mod utils;
