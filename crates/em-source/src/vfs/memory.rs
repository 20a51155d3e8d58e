//! An in-memory filesystem.

use super::{normalize_dir, not_found, DirEntry, VirtualFs};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Read};

/// [`VirtualFs`] backed by an in-memory map of paths to contents.
///
/// Directories are implied by the files below them; [`with_dir`] adds a
/// directory explicitly so empty ones can exist.
///
/// [`with_dir`]: MemoryFs::with_dir
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl MemoryFs {
    /// Create an empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous content at `path`
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert_file(path, content);
        self
    }

    /// Add an (empty) directory
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert_dir(path);
        self
    }

    /// Add a file in place
    pub fn insert_file(&mut self, path: &str, content: impl Into<Vec<u8>>) {
        self.files
            .insert(normalize_dir(path).to_string(), content.into());
    }

    /// Add a directory in place
    pub fn insert_dir(&mut self, path: &str) {
        let dir = normalize_dir(path);
        if !dir.is_empty() {
            self.dirs.insert(dir.to_string());
        }
    }

    /// Number of files held
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no files are held
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl VirtualFs for MemoryFs {
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let dir = normalize_dir(path);
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };

        // name -> is_dir
        let mut children: BTreeMap<&str, bool> = BTreeMap::new();
        let mut found = dir.is_empty() || self.dirs.contains(dir);

        let paths = self
            .files
            .keys()
            .map(|p| (p.as_str(), false))
            .chain(self.dirs.iter().map(|d| (d.as_str(), true)));

        for (entry_path, is_dir) in paths {
            let Some(rest) = entry_path.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            found = true;
            match rest.split_once('/') {
                Some((sub, _)) => {
                    children.insert(sub, true);
                }
                None => {
                    children.entry(rest).or_insert(is_dir);
                }
            }
        }

        if !found {
            return Err(not_found("directory", path));
        }

        Ok(children
            .into_iter()
            .map(|(name, is_dir)| DirEntry {
                name: name.to_string(),
                is_dir,
            })
            .collect())
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let content = self
            .files
            .get(normalize_dir(path))
            .ok_or_else(|| not_found("file", path))?;
        Ok(Box::new(content.as_slice()))
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
