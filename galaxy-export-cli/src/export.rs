//! The export pipeline: read, route, lay out, write.

use std::path::{Path, PathBuf};

use galaxy_export_core::ExportOptions;
use galaxy_export_report::{Report, ReportWriter, report_columns};

use crate::CliError;

/// What an export produced, for the closing summary.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub output: PathBuf,
    pub games_read: usize,
    /// Sheet name and row count, in sheet order.
    pub sheets: Vec<(String, usize)>,
}

impl ExportSummary {
    pub fn games_written(&self) -> usize {
        self.sheets.iter().map(|(_, rows)| rows).sum()
    }
}

/// Export the library at `db_path` into `output`.
///
/// The database is fully read and closed before anything is written, and
/// any failure aborts the run without producing a partial report.
pub fn run_export(
    db_path: &Path,
    output: &Path,
    options: &ExportOptions,
    writer: &dyn ReportWriter,
) -> Result<ExportSummary, CliError> {
    log::info!("Reading library from {}", db_path.display());
    let library = galaxy_export_db::read_library(db_path, &options.tags)?;
    let games_read = library.len();
    log::debug!(
        "Read {} games, {} referenced as DLC",
        games_read,
        library.dlcs().len()
    );

    let routing = options.router().route(library);
    log::debug!(
        "Skipped {} generic, {} filtered by platform, {} DLC",
        routing.skipped.generic,
        routing.skipped.not_allowed,
        routing.skipped.dlc,
    );

    let columns = report_columns(options.tags.is_enabled());
    let report = Report::build(&routing.groups, &columns);

    log::debug!("Writing {} report to {}", writer.name(), output.display());
    writer.write(&report, output)?;

    Ok(ExportSummary {
        output: output.to_path_buf(),
        games_read,
        sheets: report
            .sheets
            .iter()
            .map(|s| (s.name.clone(), s.rows.len()))
            .collect(),
    })
}
