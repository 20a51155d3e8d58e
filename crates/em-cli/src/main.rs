//! Embedmig CLI - inspect and validate migration script directories

use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{check, common, ls, show};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        cli::Commands::Ls(args) => ls::execute(args, &cli.global),
        cli::Commands::Show(args) => show::execute(args, &cli.global),
        cli::Commands::Check => check::execute(&cli.global),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<common::ExitCode>() {
            Some(code) => std::process::ExitCode::from(code.0),
            None => {
                eprintln!("Error: {err:#}");
                std::process::ExitCode::FAILURE
            }
        },
    }
}
