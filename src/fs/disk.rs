//! Disk-backed filesystem rooted at a directory

use super::{check_path, not_found, Entry, EntryKind, FileEntry, FileSystem};
use hyper::body::Bytes;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request path onto the root, refusing anything that escapes it
    fn resolve(&self, path: &str) -> io::Result<PathBuf> {
        check_path(path)?;

        let root = self.root.canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("open {path}: static root '{}': {e}", self.root.display()),
            )
        })?;

        // Missing files fail here with NotFound
        let resolved = self
            .root
            .join(path.trim_start_matches('/'))
            .canonicalize()
            .map_err(|_| not_found(path))?;

        // Symlinks pointing outside the root
        if !resolved.starts_with(&root) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("open {path}: resolves outside the static root"),
            ));
        }
        Ok(resolved)
    }
}

impl FileSystem for DiskFs {
    fn open(&self, path: &str) -> io::Result<Entry> {
        let resolved = self.resolve(path)?;
        let meta = std::fs::metadata(&resolved)?;
        if meta.is_dir() {
            return Ok(Entry::Dir);
        }
        let data = std::fs::read(&resolved)?;
        Ok(Entry::File(FileEntry {
            data: Bytes::from(data),
            modified: meta.modified().ok(),
        }))
    }

    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        let meta = std::fs::metadata(self.resolve(path)?)?;
        Ok(if meta.is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        })
    }
}
