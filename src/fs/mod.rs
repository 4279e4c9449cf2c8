//! Filesystem capability module
//!
//! Provides the shared existence probe and the read-only `FileSystem`
//! abstraction that static assets are served from (disk-backed or in-memory).

mod disk;
mod memory;

pub use disk::DiskFs;
pub use memory::MemoryFs;

use hyper::body::Bytes;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Expected type of a probed path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// Check whether `path` exists on the host filesystem and has the given type
///
/// Symlinks are followed. Any failure to stat the path (missing, permission
/// denied, broken link) yields `false`.
///
/// # Examples
/// ```
/// use web_helpers::fs::{probe, EntryKind};
/// assert!(probe("src", EntryKind::Dir));
/// assert!(!probe("src", EntryKind::File));
/// assert!(!probe("does-not-exist", EntryKind::File));
/// ```
pub fn probe(path: impl AsRef<Path>, kind: EntryKind) -> bool {
    std::fs::metadata(path.as_ref()).is_ok_and(|meta| match kind {
        EntryKind::File => meta.is_file(),
        EntryKind::Dir => meta.is_dir(),
    })
}

/// Opened file contents
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub data: Bytes,
    /// Modification time, if the backing store tracks one
    pub modified: Option<SystemTime>,
}

/// Result of opening a path
#[derive(Debug, Clone)]
pub enum Entry {
    File(FileEntry),
    Dir,
}

impl Entry {
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::File(_) => EntryKind::File,
            Self::Dir => EntryKind::Dir,
        }
    }
}

/// Read-only virtual filesystem
///
/// Paths are request-style (`/static/app.css`); a leading `/` is ignored.
pub trait FileSystem: Send + Sync {
    /// Open a path. Missing paths return `io::ErrorKind::NotFound`.
    fn open(&self, path: &str) -> io::Result<Entry>;

    /// Type of the entry at `path` without reading its contents
    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        self.open(path).map(|entry| entry.kind())
    }

    /// Existence probe over this filesystem
    fn probe(&self, path: &str, kind: EntryKind) -> bool {
        self.stat(path).is_ok_and(|found| found == kind)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn open(&self, path: &str) -> io::Result<Entry> {
        (**self).open(path)
    }

    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        (**self).stat(path)
    }
}

/// Reject paths containing a `..` segment
///
/// Both separators count, so `a\..\b` is refused as well.
pub fn check_path(path: &str) -> io::Result<()> {
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("open {path}: invalid argument"),
        ));
    }
    Ok(())
}

/// Build the error returned for a path that does not resolve
pub(crate) fn not_found(path: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("open {path}: file does not exist"),
    )
}
