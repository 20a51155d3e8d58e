//! Rendering migrations back into annotated scripts

use crate::command::{ends_with_semicolon, COMMAND_PREFIX, OPTION_NO_TRANSACTION};
use crate::parser::ParserOptions;
use em_core::{Direction, Migration};

/// Render the given directions of `migration` as an annotated script.
///
/// Parsing the output with the same `options` yields the same statements.
/// A statement is wrapped in `StatementBegin` / `StatementEnd` when a plain
/// rendering would split it or leave it unterminated; a statement ending
/// without a semicolon is followed by the line separator when one is set.
pub fn render_script(
    migration: &Migration,
    directions: &[Direction],
    options: &ParserOptions,
) -> String {
    let separator = options
        .line_separator
        .as_deref()
        .filter(|sep| !sep.is_empty());

    let mut out = format!("-- {}\n", migration.id);
    for &direction in directions {
        let name = match direction {
            Direction::Up => "Up",
            Direction::Down => "Down",
        };
        out.push_str(COMMAND_PREFIX);
        out.push_str(name);
        if migration.disable_transaction(direction) {
            out.push(' ');
            out.push_str(OPTION_NO_TRANSACTION);
        }
        out.push('\n');

        for statement in migration.statements(direction) {
            render_statement(&mut out, statement, separator);
        }
    }
    out
}

fn render_statement(out: &mut String, statement: &str, separator: Option<&str>) {
    let lines: Vec<&str> = statement.lines().collect();
    let terminates = |line: &str| ends_with_semicolon(line) || separator == Some(line);
    let inner_terminator = lines
        .split_last()
        .is_some_and(|(_, init)| init.iter().any(|&line| terminates(line)));

    match (lines.last(), separator) {
        (Some(last), _) if !inner_terminator && ends_with_semicolon(last) => {
            push_body(out, statement);
        }
        (Some(last), Some(sep))
            if !inner_terminator && !last.trim().is_empty() && *last != sep =>
        {
            push_body(out, statement);
            out.push_str(sep);
            out.push('\n');
        }
        _ => {
            out.push_str(COMMAND_PREFIX);
            out.push_str("StatementBegin\n");
            push_body(out, statement);
            out.push_str(COMMAND_PREFIX);
            out.push_str("StatementEnd\n");
        }
    }
}

fn push_body(out: &mut String, statement: &str) {
    out.push_str(statement);
    if !statement.is_empty() && !statement.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
