use std::path::PathBuf;

use galaxy_export_core::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No database found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Required table '{0}' is missing; this does not look like a Galaxy database")]
    MissingTable(&'static str),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl SourceError {
    /// True when the database opened fine but its contents are not what we expect.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}
