//! A real directory on disk.

use super::{normalize_dir, DirEntry, VirtualFs};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// [`VirtualFs`] rooted at a directory on the local filesystem.
///
/// Useful during development, when scripts are edited in place before being
/// bundled. Paths are resolved against `root`; nothing is ever written.
///
/// Listings report each entry's own type without following symlinks, so a
/// symlinked directory shows up as a non-directory entry.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    /// Create a filesystem rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let relative = normalize_dir(path);
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }
}

impl VirtualFs for DiskFs {
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(self.resolve(path))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(DirEntry {
                name,
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(entries)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(self.resolve(path))?))
    }
}

#[cfg(test)]
#[path = "disk_test.rs"]
mod tests;
