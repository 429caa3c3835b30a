//! Read queries against the Galaxy database.

use galaxy_export_core::{PieceRow, PieceTypeCatalog, TagSelection, decode_piece_value};
use rusqlite::{Connection, Statement, params_from_iter};

use crate::error::SourceError;
use crate::schema::{TAGS_TABLE, require_table};

/// Load every piece type id and its name.
pub fn load_piece_types(conn: &Connection) -> Result<PieceTypeCatalog, SourceError> {
    let mut stmt = conn.prepare("SELECT id, type FROM GamePieceTypes")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?;
    rows.collect::<Result<PieceTypeCatalog, _>>()
        .map_err(Into::into)
}

/// A prepared statement over the pieces of every linked release.
///
/// Rows without a `GameLinks` entry are stale leftovers of removed games and
/// are never returned.
pub struct PieceReader<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> PieceReader<'conn> {
    pub fn prepare(conn: &'conn Connection) -> Result<Self, SourceError> {
        let stmt = conn.prepare(
            "SELECT releaseKey, gamePieceTypeId, value
             FROM GamePieces
             WHERE releaseKey IN (SELECT releaseKey FROM GameLinks)
             ORDER BY releaseKey ASC, gamePieceTypeId ASC",
        )?;
        Ok(Self { stmt })
    }

    /// Stream decoded rows. Single pass; each item is fetched on demand.
    pub fn rows<'a>(
        &'a mut self,
        catalog: &'a PieceTypeCatalog,
    ) -> Result<impl Iterator<Item = Result<PieceRow, SourceError>> + 'a, SourceError> {
        let raw = self.stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;

        Ok(raw.map(move |row| -> Result<PieceRow, SourceError> {
            let (release_key, type_id, json) = row?;
            let piece_type = catalog.resolve(&release_key, type_id)?;
            // A NULL cell decodes as JSON null and is rejected like any non-object.
            let text = json.as_deref().unwrap_or("null");
            let value = decode_piece_value(&release_key, piece_type, text)?;
            Ok(PieceRow::new(release_key, piece_type, value))
        }))
    }
}

/// Comma-joined tag names per release key.
///
/// `TagSelection::Only` restricts to exact tag-name matches. Releases with
/// no matching tags are simply absent from the result.
pub fn aggregate_tags(
    conn: &Connection,
    selection: &TagSelection,
) -> Result<Vec<(String, String)>, SourceError> {
    let filter: &[String] = match selection {
        TagSelection::Disabled => return Ok(Vec::new()),
        TagSelection::All => &[],
        TagSelection::Only(tags) => tags,
    };

    require_table(conn, TAGS_TABLE)?;

    let mut sql = String::from("SELECT releaseKey, group_concat(tag) FROM UserReleaseTags");
    if !filter.is_empty() {
        let placeholders = vec!["?"; filter.len()].join(", ");
        sql.push_str(&format!(" WHERE tag IN ({placeholders})"));
    }
    sql.push_str(" GROUP BY releaseKey");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(filter.iter()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
