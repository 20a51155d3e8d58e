//! Migration sources handed to a runner.

use crate::discovery;
use crate::error::SourceResult;
use crate::vfs::VirtualFs;
use em_core::{Config, Migration, MigrationParser};
use em_parse::{ParserOptions, ScriptParser};

/// Anything that can produce the ordered list of migrations a runner applies.
pub trait MigrationSource {
    /// Return every migration, sorted in application order.
    fn find_migrations(&self) -> SourceResult<Vec<Migration>>;
}

impl<T: MigrationSource + ?Sized> MigrationSource for &T {
    fn find_migrations(&self) -> SourceResult<Vec<Migration>> {
        (**self).find_migrations()
    }
}

impl<T: MigrationSource + ?Sized> MigrationSource for Box<T> {
    fn find_migrations(&self) -> SourceResult<Vec<Migration>> {
        (**self).find_migrations()
    }
}

/// Default script suffix
pub const DEFAULT_SUFFIX: &str = ".sql";

/// [`MigrationSource`] reading scripts from a directory of a [`VirtualFs`].
///
/// Every call rescans the directory; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct EmbedMigrationSource<F, P = ScriptParser> {
    fs: F,
    dir: String,
    suffix: String,
    parser: P,
}

impl<F: VirtualFs> EmbedMigrationSource<F> {
    /// Source over `dir` of `fs`, matching `.sql` files with the default parser
    pub fn new(fs: F, dir: impl Into<String>) -> Self {
        Self {
            fs,
            dir: dir.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
            parser: ScriptParser::new(),
        }
    }

    /// Source configured from an `embedmig.yml` [`Config`]
    pub fn from_config(fs: F, config: &Config) -> Self {
        let parser = ScriptParser::with_options(ParserOptions {
            line_separator: config.line_separator.clone(),
        });
        Self::new(fs, config.dir.clone())
            .with_suffix(config.suffix.clone())
            .with_parser(parser)
    }
}

impl<F: VirtualFs, P: MigrationParser> EmbedMigrationSource<F, P> {
    /// Replace the script suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replace the parser
    pub fn with_parser<Q: MigrationParser>(self, parser: Q) -> EmbedMigrationSource<F, Q> {
        EmbedMigrationSource {
            fs: self.fs,
            dir: self.dir,
            suffix: self.suffix,
            parser,
        }
    }

    /// Borrow the underlying filesystem
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Parser applied to each script
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Directory scanned for scripts
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Suffix a script must carry
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl<F: VirtualFs, P: MigrationParser> MigrationSource for EmbedMigrationSource<F, P> {
    fn find_migrations(&self) -> SourceResult<Vec<Migration>> {
        discovery::find_migrations(&self.fs, &self.dir, &self.suffix, &self.parser)
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
