//! Spreadsheet report for an exported game library.
//!
//! [`report_columns`] decides the column layout, [`Report::build`] lays
//! out one sheet per platform, and a [`ReportWriter`] persists the result.

pub mod columns;
pub mod error;
pub mod report;
pub mod xlsx;

pub use columns::{
    CellFormatter, CellValue, ColumnSpec, ColumnValue, DEFAULT_WIDTH, format_achievements,
    partition_filterable, report_columns,
};
pub use error::ReportError;
pub use report::{ColumnHeader, FilterRange, Report, Sheet, sanitize_sheet_name, unique_sheet_name};
pub use xlsx::XlsxReportWriter;

use std::path::{Path, PathBuf};

/// Trait for document formats a [`Report`] can be written as.
pub trait ReportWriter {
    fn name(&self) -> &'static str;

    /// File extension appended to the output base name.
    fn extension(&self) -> &'static str;

    /// Persist `report` at `dest`, replacing any existing file.
    fn write(&self, report: &Report, dest: &Path) -> Result<(), ReportError>;

    /// `<base>.<extension>`, appended even if `base` already has an extension.
    fn output_path(&self, base: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", base, self.extension()))
    }
}
