//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! floor-plan loading and timestamp formatting.

use std::path::PathBuf;

use crate::error::CliError;
use innkeep::FloorPlan;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path to a floor-plan file overriding the default layout.
    pub config: Option<PathBuf>,
}

/// Load the floor plan: the `--config` file if given, the default layout
/// otherwise.
///
/// Any failure to read or parse the file is a configuration error.
pub fn load_floor_plan(global: &GlobalOptions) -> Result<FloorPlan, CliError> {
    match &global.config {
        Some(path) => FloorPlan::load_from_path(path).map_err(|e| match e {
            innkeep::Error::Io(err) => CliError::Config(format!(
                "cannot read floor plan {}: {err}",
                path.display()
            )),
            other => CliError::from(other),
        }),
        None => Ok(FloorPlan::default()),
    }
}

/// Format a `SystemTime` as a human-readable UTC timestamp.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
