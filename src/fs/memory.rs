//! In-memory filesystem
//!
//! Backs embedded assets (`include_bytes!`) or test fixtures. Directories are
//! not stored; a directory exists whenever some file lives beneath it.

use super::{check_path, not_found, Entry, EntryKind, FileEntry, FileSystem};
use hyper::body::Bytes;
use std::collections::BTreeMap;
use std::io;
use std::time::SystemTime;

#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, FileEntry>,
    modified: Option<SystemTime>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a static table, e.g. assets embedded at compile time
    pub fn from_static(files: &'static [(&'static str, &'static [u8])]) -> Self {
        let mut fs = Self::new();
        for (path, data) in files {
            fs.insert(path, Bytes::from_static(data));
        }
        fs
    }

    /// Modification time reported for every file inserted afterwards
    #[must_use]
    pub const fn with_modified(mut self, modified: SystemTime) -> Self {
        self.modified = Some(modified);
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: &str, data: impl Into<Bytes>) -> Self {
        self.insert(path, data);
        self
    }

    pub fn insert(&mut self, path: &str, data: impl Into<Bytes>) {
        self.files.insert(
            normalize(path).to_string(),
            FileEntry {
                data: data.into(),
                modified: self.modified,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn is_dir(&self, path: &str) -> bool {
        if path.is_empty() {
            return true;
        }
        let prefix = format!("{path}/");
        self.files
            .range(prefix.clone()..)
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix))
    }
}

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

impl FileSystem for MemoryFs {
    fn open(&self, path: &str) -> io::Result<Entry> {
        check_path(path)?;
        let key = normalize(path);
        if let Some(file) = self.files.get(key) {
            return Ok(Entry::File(file.clone()));
        }
        if self.is_dir(key) {
            return Ok(Entry::Dir);
        }
        Err(not_found(path))
    }

    fn stat(&self, path: &str) -> io::Result<EntryKind> {
        check_path(path)?;
        let key = normalize(path);
        if self.files.contains_key(key) {
            Ok(EntryKind::File)
        } else if self.is_dir(key) {
            Ok(EntryKind::Dir)
        } else {
            Err(not_found(path))
        }
    }
}
