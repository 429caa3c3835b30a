//! Opening the Galaxy database and checking it has the tables we read.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::SourceError;

pub const PIECE_TYPES_TABLE: &str = "GamePieceTypes";
pub const PIECES_TABLE: &str = "GamePieces";
pub const LINKS_TABLE: &str = "GameLinks";
/// Only needed when tags are requested.
pub const TAGS_TABLE: &str = "UserReleaseTags";

/// Tables every export reads from.
pub const REQUIRED_TABLES: &[&str] = &[PIECE_TYPES_TABLE, PIECES_TABLE, LINKS_TABLE];

/// Open an existing Galaxy database read-only and verify its core tables.
///
/// Never creates a file: a missing path is reported as [`SourceError::NotFound`].
pub fn open_read_only(path: &Path) -> Result<Connection, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    for &table in REQUIRED_TABLES {
        require_table(&conn, table)?;
    }

    Ok(conn)
}

/// Fail with [`SourceError::MissingTable`] unless `table` exists.
///
/// This is also the first statement run against a fresh connection, so a
/// file that is not SQLite at all surfaces here as [`SourceError::Sqlite`].
pub fn require_table(conn: &Connection, table: &'static str) -> Result<(), SourceError> {
    if table_exists(conn, table)? {
        Ok(())
    } else {
        Err(SourceError::MissingTable(table))
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool, SourceError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists)
}
