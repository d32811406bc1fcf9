//! Run command implementation.
//!
//! Starts the interactive front-desk session over stdin/stdout. This is
//! also what the bare `innkeep` invocation does.

use clap::Args;
use std::io;

use crate::error::CliError;
use crate::session::Session;
use crate::utils::{load_floor_plan, GlobalOptions};

/// Start the interactive front-desk session.
#[derive(Args, Default)]
pub struct RunCommand {}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let plan = load_floor_plan(global)?;
        let logger = innkeep::init_logger(global.verbose, global.quiet);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(plan, stdin.lock(), stdout.lock());

        logger.info("front-desk session started");
        session.run()?;
        logger.info("front-desk session ended");
        Ok(())
    }
}
