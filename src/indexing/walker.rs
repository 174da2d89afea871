//! Icon sources: where SVG files are listed and read from.
//!
//! The indexer only needs "list entries" and "read bytes for a relative
//! path", so any backend implementing [`IconSource`] can stand in for the
//! filesystem.

use std::path::{Path, PathBuf};

use crate::catalog::IconFile;
use crate::error::{IndexError, IndexResult};

/// A flat collection of icon files.
pub trait IconSource: Send + Sync {
    /// All `.svg` files, sorted by file name.
    fn list(&self) -> IndexResult<Vec<IconFile>>;

    /// Raw bytes of a file returned by [`IconSource::list`].
    fn read(&self, relative_path: &str) -> std::io::Result<Vec<u8>>;

    /// Location used in logs and error messages.
    fn location(&self) -> PathBuf;
}

/// Whether a file name carries an `.svg` extension (any case).
pub fn is_svg(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Icon directory on the local filesystem. Not recursive.
#[derive(Debug, Clone)]
pub struct FsIconSource {
    root: PathBuf,
}

impl FsIconSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl IconSource for FsIconSource {
    fn list(&self) -> IndexResult<Vec<IconFile>> {
        let not_found = |reason: String| IndexError::DirectoryNotFound {
            path: self.root.clone(),
            reason,
        };

        if !self.root.is_dir() {
            return Err(not_found("not a directory".to_string()));
        }

        let entries = std::fs::read_dir(&self.root).map_err(|e| not_found(e.to_string()))?;

        let mut files: Vec<IconFile> = entries
            .filter_map(Result::ok) // Skip entries we can't access
            .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_svg(name))
            .map(IconFile::new)
            .collect();

        // read_dir order is platform dependent
        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    fn read(&self, relative_path: &str) -> std::io::Result<Vec<u8>> {
        let path = Path::new(relative_path);
        // Catalog paths are bare file names; refuse anything that walks out
        if path.components().count() != 1 || path.is_absolute() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("not a file in the icon directory: {relative_path}"),
            ));
        }
        std::fs::read(self.root.join(path))
    }

    fn location(&self) -> PathBuf {
        self.root.clone()
    }
}
