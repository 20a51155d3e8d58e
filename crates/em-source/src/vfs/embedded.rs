//! Assets bundled into the binary with `rust-embed`.

use super::{normalize_dir, not_found, DirEntry, VirtualFs};
use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use std::io::{self, Cursor, Read};
use std::marker::PhantomData;

/// [`VirtualFs`] over a `#[derive(RustEmbed)]` asset folder.
///
/// ```ignore
/// #[derive(RustEmbed)]
/// #[folder = "db/"]
/// struct Bundled;
///
/// let fs = EmbeddedFs::<Bundled>::new();
/// ```
///
/// rust-embed only records files, so a directory exists exactly when at least
/// one embedded file lives below it. Empty directories cannot be bundled and
/// list as `NotFound`.
pub struct EmbeddedFs<E: RustEmbed> {
    _assets: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedFs<E> {
    /// Create a filesystem view over the assets of `E`
    pub fn new() -> Self {
        Self {
            _assets: PhantomData,
        }
    }
}

impl<E: RustEmbed> Default for EmbeddedFs<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RustEmbed> Clone for EmbeddedFs<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E: RustEmbed> std::fmt::Debug for EmbeddedFs<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFs")
            .field("assets", &std::any::type_name::<E>())
            .finish()
    }
}

impl<E: RustEmbed> VirtualFs for EmbeddedFs<E> {
    fn read_dir(&self, path: &str) -> io::Result<Vec<DirEntry>> {
        let dir = normalize_dir(path);
        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        };

        let mut files = Vec::new();
        let mut dirs = BTreeSet::new();
        let mut found = dir.is_empty();

        for asset in E::iter() {
            let Some(rest) = asset.strip_prefix(prefix.as_str()) else {
                continue;
            };
            found = true;
            match rest.split_once('/') {
                Some((sub, _)) => {
                    dirs.insert(sub.to_string());
                }
                None => files.push(DirEntry::file(rest)),
            }
        }

        if !found {
            return Err(not_found("embedded directory", path));
        }

        files.extend(dirs.into_iter().map(DirEntry::dir));
        Ok(files)
    }

    fn open(&self, path: &str) -> io::Result<Box<dyn Read + '_>> {
        let file = E::get(path.trim_start_matches('/'))
            .ok_or_else(|| not_found("embedded file", path))?;
        Ok(Box::new(Cursor::new(file.data)))
    }
}
