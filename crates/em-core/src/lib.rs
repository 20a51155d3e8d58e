//! em-core - Core library for Embedmig
//!
//! This crate provides the migration record shared by every Embedmig
//! component, the ordering relation used to sequence migrations, the parser
//! seam the discovery pipeline calls through, and project configuration.

pub mod config;
pub mod error;
pub mod migration;
pub mod migration_id;
pub mod parser;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use migration::{Direction, Migration};
pub use migration_id::MigrationId;
pub use parser::{BoxError, MigrationParser};
