//! Error types shared across the scan pipeline.

use std::io;
use thiserror::Error;

/// A fatal error while scanning or reporting.
///
/// Permission-denied entries never surface here; the collector skips them.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The directory walk failed for a reason other than permissions.
    #[error("traversal error: {0}")]
    Traversal(#[from] walkdir::Error),
    /// Writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A scan-related `Result`.
pub type ScanResult<T> = Result<T, ScanError>;
