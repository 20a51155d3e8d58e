//! Migration records and their ordering relation.

use crate::migration_id::MigrationId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single parsed migration script.
///
/// Statement bodies are opaque to Embedmig; they are passed through to the
/// runner exactly as the parser split them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Migration {
    /// Identity derived from the script filename
    pub id: MigrationId,

    /// Statements applied when migrating up
    #[serde(default)]
    pub up: Vec<String>,

    /// Statements applied when rolling back
    #[serde(default)]
    pub down: Vec<String>,

    /// Run the up statements outside a transaction
    #[serde(default)]
    pub disable_transaction_up: bool,

    /// Run the down statements outside a transaction
    #[serde(default)]
    pub disable_transaction_down: bool,
}

impl Migration {
    /// Create a migration with no statements.
    pub fn new(id: MigrationId) -> Self {
        Self {
            id,
            up: Vec::new(),
            down: Vec::new(),
            disable_transaction_up: false,
            disable_transaction_down: false,
        }
    }

    /// Version encoded in the id, see [`MigrationId::version`].
    pub fn version(&self) -> Option<i64> {
        self.id.version()
    }

    /// Strict "runs before" relation between two migrations.
    ///
    /// - two numeric ids with different versions compare by version;
    /// - a numeric id runs before a non-numeric one;
    /// - anything else compares the ids as byte strings.
    pub fn less(&self, other: &Migration) -> bool {
        match (self.version(), other.version()) {
            (Some(a), Some(b)) if a != b => a < b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            _ => self.id.as_str() < other.id.as_str(),
        }
    }

    /// Total ordering derived from [`less`](Self::less).
    pub fn compare(&self, other: &Migration) -> Ordering {
        if self.less(other) {
            Ordering::Less
        } else if other.less(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Statements for the given direction.
    pub fn statements(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    /// Whether the given direction must run outside a transaction.
    pub fn disable_transaction(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.disable_transaction_up,
            Direction::Down => self.disable_transaction_down,
        }
    }
}

/// Direction a migration is applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
