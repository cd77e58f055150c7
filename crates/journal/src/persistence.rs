//! Writing journals to disk.
//!
//! Persistence owns the storage concern so the journal doesn't have to.
//! If the storage format or destination ever changes, this is the only
//! module that does.

use crate::error::{JournalError, Result};
use crate::journal::Journal;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Saves journals to files.
#[derive(Debug, Clone, Copy, Default)]
pub struct Persistence;

impl Persistence {
    pub fn new() -> Self {
        Self
    }

    /// Write `journal` to `path`, one entry per line with a trailing newline.
    ///
    /// The write proceeds when `overwrite` is true or the file does not
    /// exist yet; an existing file without `overwrite` is an
    /// [`JournalError::AlreadyExists`] error.
    pub fn save(&self, journal: &Journal, path: &Path, overwrite: bool) -> Result<()> {
        if path.exists() && !overwrite {
            debug!("Not overwriting existing file {}", path.display());
            return Err(JournalError::AlreadyExists {
                path: path.display().to_string(),
            });
        }

        let mut contents = journal.to_string();
        contents.push('\n');
        fs::write(path, contents)?;

        info!(
            "Saved journal ({} entries) to {}",
            journal.len(),
            path.display()
        );
        Ok(())
    }
}
