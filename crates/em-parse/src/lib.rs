//! em-parse - Migration script grammar for Embedmig
//!
//! Splits a migration script into "up" and "down" statement lists using
//! `-- +migrate` annotations:
//!
//! ```sql
//! -- +migrate Up
//! CREATE TABLE people (id INT);
//!
//! -- +migrate Down
//! DROP TABLE people;
//! ```
//!
//! `-- +migrate StatementBegin` / `-- +migrate StatementEnd` wrap statements
//! that contain semicolons of their own, and `notransaction` after `Up` or
//! `Down` marks that direction to run outside a transaction.
//!
//! [`render_script`] goes the other way, turning a parsed migration back into
//! a script the parser reads into the same statements.

pub mod command;
pub mod error;
pub mod parser;
pub mod render;

pub use error::{ParseError, ParseResult};
pub use parser::{parse_migration, ParsedScript, ParserOptions, ScriptParser};
pub use render::render_script;
