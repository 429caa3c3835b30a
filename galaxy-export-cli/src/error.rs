use galaxy_export_db::SourceError;
use galaxy_export_report::ReportError;
use thiserror::Error;

/// Errors that abort an export. The message names the phase that failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// The database could not be opened or queried
    #[error("Reading the database failed: {0}")]
    DataSource(String),

    /// The database layout is not one we understand
    #[error("Unsupported database schema: {0}")]
    Schema(String),

    /// The report could not be written
    #[error("Writing the report failed: {0}")]
    Output(String),
}

impl CliError {
    pub fn data_source(msg: impl Into<String>) -> Self {
        Self::DataSource(msg.into())
    }

    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        if err.is_schema_mismatch() {
            Self::schema(err.to_string())
        } else {
            Self::data_source(err.to_string())
        }
    }
}

impl From<ReportError> for CliError {
    fn from(err: ReportError) -> Self {
        Self::output(err.to_string())
    }
}
