//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use em_core::{Config, CoreError};
use em_source::{DiskFs, EmbedMigrationSource, Migration, MigrationSource};
use std::fmt;
use std::path::Path;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) u8);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main.rs maps it to the process exit status
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Resolve the configuration for this invocation.
///
/// An explicit `--config` must exist. Otherwise `embedmig.yml` in the project
/// directory is used when present, falling back to defaults. `--dir`
/// overrides the configured directory either way and is validated like a
/// configured one.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(Path::new(path)).context("Failed to load config")?,
        None => match Config::load_from_dir(Path::new(&global.project_dir)) {
            Ok(config) => config,
            Err(CoreError::ConfigNotFound { path }) => {
                if global.verbose {
                    eprintln!("[verbose] No config at {path}, using defaults");
                }
                Config::default()
            }
            Err(e) => return Err(e).context("Failed to load config"),
        },
    };

    if let Some(dir) = &global.dir {
        config.dir = dir.clone();
        config
            .validate()
            .with_context(|| format!("Invalid --dir '{dir}'"))?;
    }

    if global.verbose {
        eprintln!(
            "[verbose] Migrations: {}/{} (*{})",
            global.project_dir, config.dir, config.suffix
        );
    }
    Ok(config)
}

/// Build the migration source rooted at the project directory.
pub(crate) fn open_source(global: &GlobalArgs) -> Result<EmbedMigrationSource<DiskFs>> {
    let config = load_config(global)?;
    Ok(EmbedMigrationSource::from_config(
        DiskFs::new(&global.project_dir),
        &config,
    ))
}

/// Discover migrations, attaching the scanned directory to any error.
pub(crate) fn discover(source: &EmbedMigrationSource<DiskFs>) -> Result<Vec<Migration>> {
    let migrations = source
        .find_migrations()
        .with_context(|| format!("Failed to discover migrations in '{}'", source.dir()))?;
    log::debug!("Discovered {} migrations", migrations.len());
    Ok(migrations)
}

/// Find a migration by id, accepting the id with or without `suffix`.
pub(crate) fn find_by_id<'a>(
    migrations: &'a [Migration],
    id: &str,
    suffix: &str,
) -> Option<&'a Migration> {
    migrations
        .iter()
        .find(|m| m.id == id)
        .or_else(|| {
            migrations
                .iter()
                .find(|m| m.id.strip_suffix(suffix) == Some(id))
        })
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
