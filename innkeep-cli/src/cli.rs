//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{RoomsCommand, RunCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing a hotel room catalog.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Manage a hotel room catalog", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to a floor-plan file overriding the default layout
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
///
/// With no subcommand, the interactive front-desk session is started.
#[derive(Subcommand)]
pub enum Command {
    /// Start the interactive front-desk session (the default)
    Run(RunCommand),

    /// Print the room catalog
    Rooms(RoomsCommand),

    /// Validate a floor-plan file
    Validate(ValidateCommand),
}
