//! Main entry point for the innkeep CLI.
//!
//! This is the command-line interface for the innkeep hotel room catalog.
//! It provides:
//! - the interactive front-desk session (default, or `run`)
//! - `rooms`: print the room catalog
//! - `validate`: validate a floor-plan file

mod cli;
mod commands;
mod error;
mod session;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::RunCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = innkeep::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command; no subcommand starts the interactive session
    let result = match cli.command {
        Some(cli::Command::Run(cmd)) => cmd.execute(&global),
        Some(cli::Command::Rooms(cmd)) => cmd.execute(&global),
        Some(cli::Command::Validate(cmd)) => cmd.execute(&global),
        None => RunCommand::default().execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
