//! em-source - Migration discovery for Embedmig
//!
//! Reads migration scripts out of a read-only [`VirtualFs`] (assets bundled
//! with `rust-embed`, a directory on disk, or an in-memory map), parses each
//! one and hands back the migrations in the order a runner must apply them.
//!
//! ```ignore
//! #[derive(rust_embed::RustEmbed)]
//! #[folder = "db/"]
//! struct Bundled;
//!
//! let source = EmbedMigrationSource::new(EmbeddedFs::<Bundled>::new(), "migrations");
//! let migrations = source.find_migrations()?;
//! ```

pub mod discovery;
pub mod error;
pub mod source;
pub mod vfs;

pub use discovery::{find_migrations, sort_by_less, sort_migrations};
pub use em_core::{Migration, MigrationParser};
pub use error::{SourceError, SourceResult};
pub use source::{EmbedMigrationSource, MigrationSource};
pub use vfs::{DirEntry, DiskFs, EmbeddedFs, MemoryFs, VirtualFs};
