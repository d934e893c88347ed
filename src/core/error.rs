//! Error types for loading and parsing course data

use std::path::PathBuf;
use thiserror::Error;

/// A row of course data could not be converted into a `Course`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A numeric column held something that is not a number
    #[error("line {line}: malformed number in '{field}' column: '{value}'")]
    MalformedNumber {
        /// 1-based line number in the source text
        line: usize,
        /// Column name (year, term, units or grade)
        field: &'static str,
        /// The offending raw value
        value: String,
    },
}

/// Failure while reading a course file from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but its content is malformed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}
