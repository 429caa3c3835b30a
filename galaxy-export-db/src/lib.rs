//! Read-only access to a GOG Galaxy `galaxy-2.0.db` database.
//!
//! Loads the piece type catalog, streams game pieces into a
//! [`GameLibrary`], and optionally attaches the user's tags.

pub mod error;
pub mod queries;
pub mod schema;

use std::path::Path;

use galaxy_export_core::{GameLibrary, TagSelection, assemble};

pub use error::SourceError;
pub use queries::{PieceReader, aggregate_tags, load_piece_types};
pub use schema::{REQUIRED_TABLES, open_read_only, require_table};

/// Run the whole read phase against the database at `path`.
///
/// The connection lives only for the duration of this call and is released
/// on every return path, so nothing downstream can hold it open.
pub fn read_library(path: &Path, tags: &TagSelection) -> Result<GameLibrary, SourceError> {
    let conn = open_read_only(path)?;

    let catalog = load_piece_types(&conn)?;
    log::debug!("Loaded {} piece types", catalog.len());

    let mut library = {
        let mut reader = PieceReader::prepare(&conn)?;
        assemble(reader.rows(&catalog)?)?
    };

    if tags.is_enabled() {
        let tagged = aggregate_tags(&conn, tags)?;
        let merged = library.merge_tags(tagged);
        log::debug!("Attached tags to {} games", merged);
    }

    Ok(library)
}
