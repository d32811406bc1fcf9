//! Rooms command implementation.
//!
//! This module implements the `rooms` command, which prints the catalog a
//! floor plan produces in various formats (table, JSON, CSV).

use std::io;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::CliError;
use crate::utils::{load_floor_plan, GlobalOptions};
use innkeep::{occupancy_totals, Price, RoomCatalog};

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 4] = ["room", "type", "price_per_night", "status"];

/// Print the room catalog.
#[derive(Args)]
pub struct RoomsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "INNKEEP_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the rooms command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table.
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

#[derive(Serialize)]
struct RoomRow {
    room: u16,
    #[serde(rename = "type")]
    room_type: String,
    price_per_night: Price,
    status: &'static str,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let plan = load_floor_plan(global)?;
        let catalog = RoomCatalog::initialize(&plan);

        let rows: Vec<RoomRow> = catalog
            .iter()
            .map(|room| RoomRow {
                room: room.number().value(),
                room_type: room.room_type().to_string(),
                price_per_night: room.price_per_night(),
                status: if room.is_booked() { "Booked" } else { "Available" },
            })
            .collect();

        match self.format {
            OutputFormat::Table => {
                let (total, available) = occupancy_totals(&catalog);
                if !global.quiet {
                    println!("--- Room List ({total} total, {available} available) ---");
                }
                println!("Room  | Type    | Price/Night | Status");
                println!("---------------------------------------");
                for row in &rows {
                    println!(
                        "{:<5} | {:<7} | {:<11} | {}",
                        row.room,
                        row.room_type,
                        row.price_per_night.to_string(),
                        row.status
                    );
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)
                    .map_err(|e| CliError::Io(io::Error::other(e)))?;
                println!("{json}");
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(io::stdout());
                writer
                    .write_record(COLUMN_HEADERS)
                    .map_err(|e| CliError::Io(io::Error::other(e)))?;
                for row in &rows {
                    writer
                        .write_record([
                            row.room.to_string(),
                            row.room_type.clone(),
                            row.price_per_night.to_string(),
                            row.status.to_string(),
                        ])
                        .map_err(|e| CliError::Io(io::Error::other(e)))?;
                }
                writer.flush().map_err(CliError::Io)?;
            }
        }
        Ok(())
    }
}
