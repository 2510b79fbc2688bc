//! Driver Errors
//!
//! The sorting algorithms themselves cannot fail. Everything here belongs to
//! the code around them: building the input array and reading or writing
//! benchmark reports.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("invalid array length '{requested}': must be between 1 and {max}")]
    InvalidLength { requested: String, max: usize },

    #[error("failed to allocate the array ({len} elements)")]
    Allocation { len: usize },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse the Links Notation report: {0}")]
    ReportParse(String),
}
