//! Read-only virtual filesystems migrations are discovered in.
//!
//! Paths are `/`-separated and relative to the filesystem root, the way
//! bundled asset names are written. The empty path and `.` both name the
//! root.

mod disk;
mod embedded;
mod memory;

pub use disk::DiskFs;
pub use embedded::EmbeddedFs;
pub use memory::MemoryFs;

use std::io::{self, Read};

/// Direct child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File or directory name, without the parent path
    pub name: String,
    /// Whether the entry is a sub-directory
    pub is_dir: bool,
}

impl DirEntry {
    /// Entry for a regular file
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Entry for a sub-directory
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Read-only filesystem abstraction.
///
/// Listing order is unspecified; callers that need an order must impose it.
pub trait VirtualFs {
    /// List the direct children of the directory at `path`.
    ///
    /// Fails with [`io::ErrorKind::NotFound`] if no such directory exists.
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>>;

    /// Open the file at `path` for reading.
    ///
    /// The handle is released when the returned reader is dropped.
    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>>;
}

impl<T: VirtualFs + ?Sized> VirtualFs for &T {
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

impl<T: VirtualFs + ?Sized> VirtualFs for std::sync::Arc<T> {
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}

/// Normalize a directory path: strip surrounding `/` and map `.` to the root.
pub(crate) fn normalize_dir(path: &str) -> &str {
    let trimmed = path.trim_matches('/');
    if trimmed == "." {
        ""
    } else {
        trimmed
    }
}

/// Join a directory and a child name with `/`.
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = normalize_dir(dir);
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// `NotFound` error for `path`.
pub(crate) fn not_found(what: &str, path: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{what} not found: {path}"))
}
