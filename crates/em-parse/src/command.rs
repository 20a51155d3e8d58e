//! `-- +migrate` annotation lines.

use crate::error::{ParseError, ParseResult};

/// Prefix marking a migration command line.
pub const COMMAND_PREFIX: &str = "-- +migrate ";

/// Prefix shared by every annotation; such lines never reach a statement.
pub const ANNOTATION_PREFIX: &str = "-- +";

/// Option disabling the transaction around a direction.
pub const OPTION_NO_TRANSACTION: &str = "notransaction";

/// A parsed `-- +migrate <Command> [options...]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command<'a> {
    /// First word after the prefix, e.g. `Up` or `StatementBegin`
    pub name: &'a str,
    /// Remaining words
    pub options: Vec<&'a str>,
}

impl<'a> Command<'a> {
    /// Parse line number `line_no` of a script.
    ///
    /// Returns `Ok(None)` for lines that are not commands.
    pub fn from_line(line: &'a str, line_no: usize) -> ParseResult<Option<Self>> {
        let Some(rest) = line.strip_prefix(COMMAND_PREFIX) else {
            return Ok(None);
        };
        let mut fields = rest.split_whitespace();
        let name = fields
            .next()
            .ok_or(ParseError::IncompleteCommand { line: line_no })?;
        Ok(Some(Self {
            name,
            options: fields.collect(),
        }))
    }

    /// Whether `option` was given after the command word.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| *o == option)
    }
}

/// Whether the SQL on `line` ends with a semicolon, ignoring a trailing
/// `--` comment.
pub fn ends_with_semicolon(line: &str) -> bool {
    line.split_whitespace()
        .take_while(|word| !word.starts_with("--"))
        .last()
        .is_some_and(|word| word.ends_with(';'))
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
