//! comicbook CLI - Command-line utility for extracting and archiving comic
//! books.

mod cli;
mod commands;
mod error;
mod output;

use clap::CommandFactory;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        let _ = cli::Cli::command().print_help();
        return ExitCode::SUCCESS;
    };

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    let (operation, result) = match command {
        cli::Commands::Extract(args) => ("extract", commands::extract::execute(args, &*formatter)),
        cli::Commands::Archive(args) => ("archive", commands::archive::execute(args, &*formatter)),
        cli::Commands::Pages(args) => ("pages", commands::pages::execute(args, &*formatter)),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            return ExitCode::SUCCESS;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            formatter.format_error(operation, &err);
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout carries command output only.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
