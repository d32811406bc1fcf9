//! CLI command implementations.

pub mod rooms;
pub mod run;
pub mod validate;

pub use rooms::RoomsCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;
