//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for deriving `Display` and `std::error::Error`
//! - One enum variant per failure case, with structured context
//! - `#[from]` to absorb underlying I/O errors

use thiserror::Error;

/// Errors that can occur while loading or parsing a catalog file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a catalog file couldn't be parsed
    ///
    /// Carries the file and line so the caller can point at the
    /// offending record
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A record field had a value outside the known set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A record had the wrong number of comma-separated fields
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Crate-local alias so signatures can say `Result<T>` instead of
/// spelling out the error type everywhere
pub type Result<T> = std::result::Result<T, CatalogError>;
