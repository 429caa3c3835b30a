//! galaxy-export
//!
//! Reads a GOG Galaxy 2.0 database and writes the owned games, one sheet
//! per platform, to a spreadsheet.

pub mod cli_types;
pub mod error;
pub mod export;
pub mod logging;

pub use cli_types::Cli;
pub use error::CliError;
pub use export::{ExportSummary, run_export};
pub use logging::init_logging;
