//! List command implementation

use anyhow::{Context, Result};
use em_source::Migration;
use serde::Serialize;

use crate::cli::{GlobalArgs, LsArgs, LsOutput};
use crate::commands::common::{discover, open_source};

/// One row of `emig ls` output
#[derive(Debug, Serialize)]
pub(crate) struct MigrationSummary {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
    up_statements: usize,
    down_statements: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    no_transaction_up: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    no_transaction_down: bool,
}

impl From<&Migration> for MigrationSummary {
    fn from(m: &Migration) -> Self {
        Self {
            id: m.id.to_string(),
            version: m.version(),
            up_statements: m.up.len(),
            down_statements: m.down.len(),
            no_transaction_up: m.disable_transaction_up,
            no_transaction_down: m.disable_transaction_down,
        }
    }
}

/// Execute the ls command
pub(crate) fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let source = open_source(global)?;
    let migrations = discover(&source)?;
    let summaries: Vec<MigrationSummary> = migrations.iter().map(MigrationSummary::from).collect();

    match args.output {
        LsOutput::Table => print_table(&summaries),
        LsOutput::Json => {
            let json = serde_json::to_string_pretty(&summaries)
                .context("Failed to serialize migration list")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_table(summaries: &[MigrationSummary]) {
    if summaries.is_empty() {
        println!("No migrations found.");
        return;
    }

    let id_width = summaries
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    println!(
        "{:<id_width$}  {:>14}  {:>3}  {:>4}  FLAGS",
        "ID", "VERSION", "UP", "DOWN"
    );
    for s in summaries {
        let version = s.version.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "{:<id_width$}  {:>14}  {:>3}  {:>4}  {}",
            s.id,
            version,
            s.up_statements,
            s.down_statements,
            format_flags(s)
        );
    }
    println!();
    println!("{} migrations", summaries.len());
}

/// Render the no-transaction flags as e.g. `notx:up,down`.
pub(crate) fn format_flags(s: &MigrationSummary) -> String {
    let dirs: Vec<&str> = [
        (s.no_transaction_up, "up"),
        (s.no_transaction_down, "down"),
    ]
    .into_iter()
    .filter_map(|(set, name)| set.then_some(name))
    .collect();

    if dirs.is_empty() {
        String::new()
    } else {
        format!("notx:{}", dirs.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use em_core::MigrationId;

    #[test]
    fn test_summary_from_migration() {
        let mut m = Migration::new(MigrationId::new("0007_index.sql"));
        m.up.push("CREATE INDEX i ON t (a);\n".to_string());
        m.disable_transaction_up = true;

        let summary = MigrationSummary::from(&m);
        assert_eq!(summary.version, Some(7));
        assert_eq!(summary.up_statements, 1);
        assert_eq!(summary.down_statements, 0);
        assert_eq!(format_flags(&summary), "notx:up");
    }

    #[test]
    fn test_summary_json_omits_defaults() {
        let summary = MigrationSummary::from(&Migration::new(MigrationId::new("seed.sql")));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "seed.sql",
                "up_statements": 0,
                "down_statements": 0,
            })
        );
        assert_eq!(format_flags(&summary), "");
    }
}
