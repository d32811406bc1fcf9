//! Command to validate a floor-plan file.

use clap::Args;
use std::path::PathBuf;

use crate::error::CliError;
use crate::utils::GlobalOptions;
use innkeep::FloorPlanFile;

/// Validate a floor-plan file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Floor-plan file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let contents = std::fs::read_to_string(&self.config_path)?;
        let file: FloorPlanFile = match serde_yaml::from_str(&contents) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Floor-plan file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the layout
        match file.into_plan() {
            Ok(plan) => {
                println!(
                    "Floor plan is valid ({} wings, capacity {})",
                    plan.wings().len(),
                    plan.capacity()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Floor-plan validation failed".to_string(),
                ))
            }
        }
    }
}
