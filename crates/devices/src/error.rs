//! Error types for the devices crate.

use thiserror::Error;

/// Errors a device operation can report
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The document has no pages to process
    #[error("Document '{name}' has no pages")]
    EmptyDocument { name: String },

    /// Fax destination was missing or malformed
    #[error("Invalid fax destination: '{destination}'")]
    InvalidDestination { destination: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DeviceError>;
