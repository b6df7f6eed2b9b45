//! Recursive collection of file sizes.

use crate::record::FileRecord;
use crate::types::ScanResult;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// What to do with one item produced by the walk.
#[derive(Debug)]
pub enum Visit {
    /// A non-directory entry to record.
    Record(FileRecord),
    /// A directory, or an entry we are not permitted to see.
    Skip,
    /// Any other failure. Ends the scan.
    Abort(walkdir::Error),
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
}

fn skip_or_abort(err: walkdir::Error) -> Visit {
    if is_permission_denied(&err) {
        match err.path() {
            Some(path) => log::debug!("Skipping {}: permission denied", path.display()),
            None => log::debug!("Skipping entry: permission denied"),
        }
        Visit::Skip
    } else {
        Visit::Abort(err)
    }
}

/// Decides the outcome for a single walk item.
pub fn classify(item: walkdir::Result<DirEntry>) -> Visit {
    let entry = match item {
        Ok(entry) => entry,
        Err(e) => return skip_or_abort(e),
    };

    if entry.file_type().is_dir() {
        return Visit::Skip;
    }

    match entry.metadata() {
        Ok(md) => Visit::Record(FileRecord::new(entry.into_path(), md.len())),
        Err(e) => skip_or_abort(e),
    }
}

/// Lazily walks `root` depth first, parents before children, siblings in
/// name order. Symlinks are not followed.
pub fn walk(root: &Path) -> impl Iterator<Item = Visit> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(classify)
}

/// Collects a record for every non-directory entry under `root`.
///
/// # Errors
///
/// Returns the first walk error that is not a permission error.
pub fn collect(root: &Path) -> ScanResult<Vec<FileRecord>> {
    log::debug!("Scanning {}", root.display());

    let mut records = Vec::new();

    for visit in walk(root) {
        match visit {
            Visit::Record(record) => records.push(record),
            Visit::Skip => (),
            Visit::Abort(e) => return Err(e.into()),
        }
    }

    log::debug!("Collected {} files under {}", records.len(), root.display());

    Ok(records)
}
