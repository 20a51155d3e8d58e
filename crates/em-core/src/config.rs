//! Configuration types and parsing for embedmig.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names probed by [`Config::load_from_dir`], in order.
pub const CONFIG_FILE_NAMES: &[&str] = &["embedmig.yml", "embedmig.yaml"];

/// Migration discovery configuration from embedmig.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the migration scripts, relative to the filesystem root
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Filename suffix a script must carry to be discovered (case-sensitive)
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// A line that, on its own, terminates the current statement
    #[serde(default)]
    pub line_separator: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            suffix: default_suffix(),
            line_separator: None,
        }
    }
}

const DEFAULT_DIR: &str = "migrations";

const DEFAULT_SUFFIX: &str = ".sql";

fn default_dir() -> String {
    DEFAULT_DIR.to_string()
}

fn default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_yaml(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for embedmig.yml or embedmig.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .map_or_else(
                || {
                    Err(CoreError::ConfigNotFound {
                        path: dir.join(CONFIG_FILE_NAMES[0]).display().to_string(),
                    })
                },
                |path| Self::load(&path),
            )
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> CoreResult<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.suffix.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "suffix cannot be empty".to_string(),
            });
        }

        if self.dir.starts_with('/') {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "dir '{}' must be relative to the migration filesystem root",
                    self.dir
                ),
            });
        }

        if self.line_separator.as_deref().is_some_and(str::is_empty) {
            return Err(CoreError::ConfigInvalid {
                message: "line_separator cannot be an empty string; omit it instead".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
