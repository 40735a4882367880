//! Errors that cross the library boundary.
//!
//! Only reading the file can fail. Encoding ambiguity and chapterless text are resolved
//! internally, so the one variant here carries the path and the underlying I/O cause.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure to produce a document from a path.
pub enum ReaderError {
    /// The file is missing, unreadable, or permission was denied.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    #[must_use]
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }
}

/// Result alias for fallible reader operations.
pub type Result<T> = std::result::Result<T, ReaderError>;
