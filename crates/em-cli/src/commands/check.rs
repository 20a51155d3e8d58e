//! Check command implementation

use anyhow::Result;
use em_source::MigrationSource;

use crate::cli::GlobalArgs;
use crate::commands::common::{open_source, ExitCode};

/// Execute the check command
///
/// Exits with status 1 when any script fails to list, open, read or parse.
pub(crate) fn execute(global: &GlobalArgs) -> Result<()> {
    let source = open_source(global)?;

    match source.find_migrations() {
        Ok(migrations) => {
            println!("{} migrations OK in {}", migrations.len(), source.dir());
            if global.verbose {
                for m in &migrations {
                    eprintln!("[verbose] {}", m.id);
                }
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}");
            Err(ExitCode(1).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn global(dir: &TempDir) -> GlobalArgs {
        GlobalArgs {
            verbose: false,
            project_dir: dir.path().display().to_string(),
            config: None,
            dir: None,
        }
    }

    fn write(dir: &TempDir, path: &str, content: &str) {
        let full = dir.path().join(path);
        std::fs::create_dir_all(full.parent().unwrap()).unwrap();
        std::fs::write(full, content).unwrap();
    }

    #[test]
    fn test_check_ok() {
        let dir = TempDir::new().unwrap();
        write(&dir, "migrations/0001_a.sql", "-- +migrate Up\nSELECT 1;\n");
        assert!(execute(&global(&dir)).is_ok());
    }

    #[test]
    fn test_check_failure_is_exit_code_1() {
        let dir = TempDir::new().unwrap();
        write(&dir, "migrations/0001_a.sql", "-- +migrate Up\nSELECT 1;\n");
        write(&dir, "migrations/0002_b.sql", "SELECT 2;\n");

        let err = execute(&global(&dir)).unwrap_err();
        let code = err.downcast_ref::<ExitCode>().unwrap();
        assert_eq!(code.0, 1);
    }
}
