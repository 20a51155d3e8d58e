//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Embedmig - inspect the migrations a bundled migration source would yield
#[derive(Parser, Debug)]
#[command(name = "emig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (root of the migration filesystem)
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the migration directory from config
    #[arg(short, long, global = true, env = "EMBEDMIG_DIR")]
    pub dir: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List migrations in application order
    Ls(LsArgs),

    /// Print the statements of one migration
    Show(ShowArgs),

    /// Parse every migration and report the first error
    Check,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: LsOutput,
}

/// List output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LsOutput {
    /// Table format
    Table,
    /// JSON output
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Migration id (filename), with or without the script suffix
    pub id: String,

    /// Only print one direction
    #[arg(long, value_enum)]
    pub direction: Option<DirectionArg>,
}

/// Direction filter for the show command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    Up,
    Down,
}

impl From<DirectionArg> for em_core::Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Up => em_core::Direction::Up,
            DirectionArg::Down => em_core::Direction::Down,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
