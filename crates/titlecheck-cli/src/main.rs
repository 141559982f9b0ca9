//! titlecheck CLI - validate title metadata sheets from the shell or over HTTP.

mod cli;
mod commands;
mod logging;
mod server;
mod web;

use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use logging::{LogConfig, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let is_server = matches!(cli.command, Commands::Serve { .. });
    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.quiet).with_timestamps(is_server));

    let result = match cli.command {
        Commands::Validate {
            file,
            json,
            by_row,
            output,
            strict,
            delimiter,
        } => commands::validate::run(commands::validate::ValidateArgs {
            file,
            json,
            by_row,
            output,
            strict,
            delimiter,
        }),

        Commands::Columns { json } => commands::columns::run(json).map(|()| ExitCode::SUCCESS),

        Commands::Serve {
            port,
            host,
            max_upload_mb,
        } => commands::serve::run(host, port, max_upload_mb).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
