//! The discovery pipeline: list, filter, load, parse, sort.
//!
//! Each step is a plain function so it can be exercised on its own;
//! [`find_migrations`] chains them and stops at the first error.

use crate::error::{SourceError, SourceResult};
use crate::vfs::{join_path, DirEntry, VirtualFs};
use em_core::{Migration, MigrationParser};
use std::io::Read;

/// List the direct children of `dir`.
///
/// The provider's error is returned unchanged inside [`SourceError::List`].
pub fn list_entries<F>(fs: &F, dir: &str) -> SourceResult<Vec<DirEntry>>
where
    F: VirtualFs + ?Sized,
{
    fs.read_dir(dir).map_err(|source| SourceError::List {
        dir: dir.to_string(),
        source,
    })
}

/// Keep the names of regular files ending in `suffix`.
///
/// The match is literal and case-sensitive. Listing order is preserved.
pub fn filter_scripts(entries: Vec<DirEntry>, suffix: &str) -> Vec<String> {
    entries
        .into_iter()
        .filter_map(|entry| {
            if entry.is_dir {
                log::debug!("Skipping sub-directory {}", entry.name);
                None
            } else if !entry.name.ends_with(suffix) {
                log::debug!("Skipping {} (no {} suffix)", entry.name, suffix);
                None
            } else {
                Some(entry.name)
            }
        })
        .collect()
}

/// Read the whole of `dir/filename` into memory.
///
/// The reader is dropped before returning, whether or not the read succeeded.
pub fn load_content<F>(fs: &F, dir: &str, filename: &str) -> SourceResult<Vec<u8>>
where
    F: VirtualFs + ?Sized,
{
    let path = join_path(dir, filename);
    let mut reader = fs.open(&path).map_err(|source| SourceError::Open {
        filename: filename.to_string(),
        source,
    })?;

    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|source| SourceError::Read {
            filename: filename.to_string(),
            source,
        })?;
    Ok(content)
}

/// Parse one script, attaching `filename` to any failure.
pub fn parse_file<P>(parser: &P, filename: &str, content: &[u8]) -> SourceResult<Migration>
where
    P: MigrationParser + ?Sized,
{
    parser
        .parse_migration(filename, content)
        .map_err(|source| SourceError::Parse {
            filename: filename.to_string(),
            source,
        })
}

/// Stable sort by a strict less-than relation.
///
/// Items that compare equal keep their relative order.
pub fn sort_by_less<T, L>(items: &mut [T], less: L)
where
    L: Fn(&T, &T) -> bool,
{
    items.sort_by(|a, b| {
        if less(a, b) {
            std::cmp::Ordering::Less
        } else if less(b, a) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    });
}

/// Put migrations in the order a runner applies them, see [`Migration::less`].
pub fn sort_migrations(migrations: &mut [Migration]) {
    sort_by_less(migrations, Migration::less);

    for pair in migrations.windows(2) {
        if pair[0].id == pair[1].id {
            log::warn!("Duplicate migration id {}", pair[0].id);
        }
    }
}

/// Discover, parse and order every script in `dir`.
///
/// Entries that are sub-directories or lack `suffix` are never opened. The
/// first list, open, read or parse error aborts the whole call; no partial
/// result is returned.
pub fn find_migrations<F, P>(
    fs: &F,
    dir: &str,
    suffix: &str,
    parser: &P,
) -> SourceResult<Vec<Migration>>
where
    F: VirtualFs + ?Sized,
    P: MigrationParser + ?Sized,
{
    let entries = list_entries(fs, dir)?;
    let scripts = filter_scripts(entries, suffix);
    log::debug!("Found {} migration scripts in {}", scripts.len(), dir);

    let mut migrations = Vec::with_capacity(scripts.len());
    for filename in &scripts {
        let content = load_content(fs, dir, filename)?;
        migrations.push(parse_file(parser, filename, &content)?);
    }

    sort_migrations(&mut migrations);
    Ok(migrations)
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
