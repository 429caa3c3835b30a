use std::path::PathBuf;

/// Errors that can occur while producing the report document.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Cannot create sheet '{name}': {source}")]
    Sheet {
        name: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Cannot write {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}
