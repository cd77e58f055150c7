//! Error types for the journal crate.

use thiserror::Error;

/// Errors that can occur while editing or persisting a journal
#[derive(Error, Debug)]
pub enum JournalError {
    /// Target file already exists and overwrite was not requested
    #[error("Refusing to overwrite existing file: {path}")]
    AlreadyExists { path: String },

    /// Entry index was outside the journal
    #[error("No entry at index {index} (journal has {len} entries)")]
    EntryOutOfRange { index: usize, len: usize },

    /// I/O error occurred while writing the journal
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, JournalError>;
