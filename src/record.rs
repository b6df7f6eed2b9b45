//! A single sized file.

use crate::size::ByteSize;
use std::path::{Path, PathBuf};

/// A file found during a scan, together with its size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: ByteSize,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size: ByteSize(size),
        }
    }

    pub fn extension(&self) -> String {
        extension(&self.path)
    }

    /// The report cells for this record: size, extension and path.
    pub fn cells(&self) -> [String; 3] {
        [
            self.size.to_string(),
            self.extension(),
            self.path.display().to_string(),
        ]
    }
}

/// Returns the extension of the last path element, from its final `.`
/// onwards (`".gz"` for `report.tar.gz`), or an empty string.
///
/// Unlike [`Path::extension`], dotfiles count: `.bashrc` yields `".bashrc"`.
pub fn extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };

    match name.rfind('.') {
        Some(idx) => name[idx..].to_owned(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension(Path::new("a/b/report.tar.gz")), ".gz");
        assert_eq!(extension(Path::new("a/b/README")), "");
        assert_eq!(extension(Path::new("notes.txt")), ".txt");
        assert_eq!(extension(Path::new("/home/user/.bashrc")), ".bashrc");
        assert_eq!(extension(Path::new("trailing.")), ".");
        assert_eq!(extension(Path::new("dir.d/plain")), "");
        assert_eq!(extension(Path::new("/")), "");
    }

    #[test]
    fn test_cells() {
        let record = FileRecord::new("logs/app.log", 1536);
        assert_eq!(record.cells(), ["1.50KB", ".log", "logs/app.log"]);
        assert_eq!(FileRecord::new("README", 0).cells(), ["0.00B", "", "README"]);
    }
}
