//! The seam between discovery and script parsing.

use crate::migration::Migration;

/// Boxed error returned by a [`MigrationParser`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Turns one script file into a [`Migration`].
///
/// Implementations must be deterministic and derive the migration id from
/// `filename`. Plain functions and closures with the signature
/// `Fn(&str, &[u8]) -> Result<Migration, E>` implement this trait.
pub trait MigrationParser {
    /// Parse the raw `content` of the script named `filename`.
    fn parse_migration(&self, filename: &str, content: &[u8]) -> Result<Migration, BoxError>;
}

impl<F, E> MigrationParser for F
where
    F: Fn(&str, &[u8]) -> Result<Migration, E>,
    E: Into<BoxError>,
{
    fn parse_migration(&self, filename: &str, content: &[u8]) -> Result<Migration, BoxError> {
        self(filename, content).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MigrationId;

    fn fixed(filename: &str, _content: &[u8]) -> Result<Migration, std::io::Error> {
        Ok(Migration::new(MigrationId::new(filename)))
    }

    #[test]
    fn test_fn_item_is_a_parser() {
        let migration = fixed.parse_migration("0001_a.sql", b"").unwrap();
        assert_eq!(migration.id, "0001_a.sql");
    }

    #[test]
    fn test_closure_error_is_boxed() {
        let failing = |_: &str, _: &[u8]| -> Result<Migration, String> { Err("bad".to_string()) };
        let err = failing.parse_migration("0001_a.sql", b"").unwrap_err();
        assert_eq!(err.to_string(), "bad");
    }
}
