//! Migration script parser

use crate::command::{ends_with_semicolon, Command, ANNOTATION_PREFIX, OPTION_NO_TRANSACTION};
use crate::error::{ParseError, ParseResult};
use crate::render::render_script;
use em_core::{BoxError, Direction, Migration, MigrationId, MigrationParser};

/// Parser tuning knobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// A line that, standing alone, ends the current statement (e.g. `GO`).
    ///
    /// The separator line itself is not part of the statement. Ignored
    /// inside `StatementBegin` / `StatementEnd` blocks.
    pub line_separator: Option<String>,
}

/// Statements split out of one script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedScript {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub disable_transaction_up: bool,
    pub disable_transaction_down: bool,
}

/// Parses `-- +migrate` annotated scripts into [`Migration`]s
#[derive(Debug, Clone, Default)]
pub struct ScriptParser {
    options: ParserOptions,
}

impl ScriptParser {
    /// Create a parser with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given options
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Create a parser that also splits statements on `separator` lines
    pub fn with_line_separator(separator: impl Into<String>) -> Self {
        Self::with_options(ParserOptions {
            line_separator: Some(separator.into()),
        })
    }

    /// Render `directions` of `migration` as a script this parser reads back
    /// into the same statements.
    pub fn render(&self, migration: &Migration, directions: &[Direction]) -> String {
        render_script(migration, directions, &self.options)
    }

    /// Parse the script `content` of migration `id` into a [`Migration`].
    pub fn parse(&self, id: &str, content: &[u8]) -> ParseResult<Migration> {
        let id = MigrationId::try_new(id).ok_or(ParseError::EmptyId)?;
        let text = std::str::from_utf8(content)?;
        let script = self.parse_script(text)?;
        log::debug!(
            "Parsed {}: {} up, {} down statements",
            id,
            script.up.len(),
            script.down.len()
        );
        Ok(Migration {
            id,
            up: script.up,
            down: script.down,
            disable_transaction_up: script.disable_transaction_up,
            disable_transaction_down: script.disable_transaction_down,
        })
    }

    /// Split script text into up and down statements.
    pub fn parse_script(&self, text: &str) -> ParseResult<ParsedScript> {
        let mut script = ParsedScript::default();
        let mut buf = String::new();
        let mut buf_last_line = 0;
        let mut direction: Option<Direction> = None;
        // Line of the open StatementBegin, if any
        let mut block_start: Option<usize> = None;
        let mut block_ended = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if line.starts_with("-- ") && !line.starts_with(ANNOTATION_PREFIX) {
                continue;
            }

            if let Some(cmd) = Command::from_line(line, line_no)? {
                match cmd.name {
                    "Up" | "Down" => {
                        if !buf.trim().is_empty() {
                            return Err(ParseError::MissingTerminator {
                                line: buf_last_line,
                            });
                        }
                        let next = if cmd.name == "Up" {
                            Direction::Up
                        } else {
                            Direction::Down
                        };
                        if cmd.has_option(OPTION_NO_TRANSACTION) {
                            match next {
                                Direction::Up => script.disable_transaction_up = true,
                                Direction::Down => script.disable_transaction_down = true,
                            }
                        }
                        direction = Some(next);
                    }
                    "StatementBegin" => {
                        if direction.is_some() {
                            block_start = Some(line_no);
                        }
                    }
                    "StatementEnd" => {
                        if direction.is_some() {
                            block_ended = block_start.is_some();
                            block_start = None;
                        }
                    }
                    other => {
                        log::debug!("Ignoring unknown migrate command '{other}' at line {line_no}")
                    }
                }
            }

            let Some(current) = direction else {
                continue;
            };

            let in_block = block_start.is_some();
            let is_separator = !in_block
                && self
                    .options
                    .line_separator
                    .as_deref()
                    .is_some_and(|sep| !sep.is_empty() && line == sep);

            if !is_separator && !line.starts_with(ANNOTATION_PREFIX) {
                buf.push_str(line);
                buf.push('\n');
                if !line.trim().is_empty() {
                    buf_last_line = line_no;
                }
            }

            if (!in_block && (ends_with_semicolon(line) || is_separator))
                || block_ended
            {
                block_ended = false;
                let statement = std::mem::take(&mut buf);
                match current {
                    Direction::Up => script.up.push(statement),
                    Direction::Down => script.down.push(statement),
                }
            }
        }

        if let Some(line) = block_start {
            return Err(ParseError::UnterminatedBlock { line });
        }

        if direction.is_none() {
            return Err(ParseError::NoAnnotations);
        }

        // A trailing comment-only section, e.g. "-- +migrate Down" followed by
        // nothing to undo, leaves only whitespace behind
        if !buf.trim().is_empty() {
            return Err(ParseError::MissingTerminator {
                line: buf_last_line,
            });
        }

        Ok(script)
    }
}

impl MigrationParser for ScriptParser {
    fn parse_migration(&self, filename: &str, content: &[u8]) -> Result<Migration, BoxError> {
        self.parse(filename, content).map_err(Into::into)
    }
}

/// Parse a migration with the default [`ScriptParser`].
pub fn parse_migration(id: &str, content: &[u8]) -> ParseResult<Migration> {
    ScriptParser::new().parse(id, content)
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
