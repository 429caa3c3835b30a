//! Folding the piece-row stream into one record per release key.

use std::collections::{HashMap, HashSet};

use crate::catalog::{PieceRow, piece};
use crate::error::SchemaError;
use crate::record::GameRecord;
use crate::value::AttrValue;

/// Every release key that some game lists under `dlcs`.
#[derive(Debug, Clone, Default)]
pub struct DlcIdSet(HashSet<String>);

impl DlcIdSet {
    pub fn contains(&self, release_key: &str) -> bool {
        self.0.contains(release_key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, release_key: String) {
        self.0.insert(release_key);
    }
}

/// Assembled records in discovery order, plus the DLC id set.
#[derive(Debug, Clone, Default)]
pub struct GameLibrary {
    games: Vec<GameRecord>,
    index: HashMap<String, usize>,
    dlcs: DlcIdSet,
}

impl GameLibrary {
    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn get(&self, release_key: &str) -> Option<&GameRecord> {
        self.index.get(release_key).map(|&i| &self.games[i])
    }

    pub fn dlcs(&self) -> &DlcIdSet {
        &self.dlcs
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Attach aggregated tag strings to the records they belong to.
    ///
    /// Tag rows for release keys that were never assembled are ignored.
    /// Returns the number of records that received tags.
    pub fn merge_tags<I>(&mut self, tags: I) -> usize
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut merged = 0;
        for (release_key, joined) in tags {
            match self.index.get(&release_key) {
                Some(&i) => {
                    self.games[i].set(piece::TAGS, AttrValue::text(joined));
                    merged += 1;
                }
                None => log::debug!("Ignoring tags for unknown release '{}'", release_key),
            }
        }
        merged
    }

    pub(crate) fn into_parts(self) -> (Vec<GameRecord>, DlcIdSet) {
        (self.games, self.dlcs)
    }

    fn record_mut(&mut self, release_key: &str) -> &mut GameRecord {
        let i = match self.index.get(release_key) {
            Some(&i) => i,
            None => {
                self.games.push(GameRecord::new(release_key));
                let i = self.games.len() - 1;
                self.index.insert(release_key.to_string(), i);
                i
            }
        };
        &mut self.games[i]
    }
}

/// Incrementally builds a [`GameLibrary`] from piece rows.
#[derive(Debug, Default)]
pub struct GameAssembler {
    library: GameLibrary,
    rows: usize,
}

impl GameAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: PieceRow) -> Result<(), SchemaError> {
        let PieceRow {
            release_key,
            piece_type,
            value,
        } = row;

        if piece_type == piece::DLCS {
            match &value {
                AttrValue::List(items) => {
                    for item in items {
                        let key = item.as_text().map_or_else(|| item.to_string(), str::to_string);
                        self.library.dlcs.insert(key);
                    }
                }
                AttrValue::Absent => {}
                _ => return Err(SchemaError::DlcsNotAList { release_key }),
            }
        }

        let record = self.library.record_mut(&release_key);
        if record.set(piece_type.as_str(), value).is_some() {
            log::debug!("Duplicate '{}' piece for '{}', keeping the later one", piece_type, release_key);
        }
        self.rows += 1;
        Ok(())
    }

    pub fn finish(self) -> GameLibrary {
        log::debug!(
            "Assembled {} games from {} pieces ({} DLC references)",
            self.library.len(),
            self.rows,
            self.library.dlcs.len(),
        );
        self.library
    }
}

/// Consume a row stream in a single pass.
///
/// Stops at the first error, whether it came from the stream itself or from
/// a row the assembler cannot interpret.
pub fn assemble<I, E>(rows: I) -> Result<GameLibrary, E>
where
    I: IntoIterator<Item = Result<PieceRow, E>>,
    E: From<SchemaError>,
{
    let mut assembler = GameAssembler::new();
    for row in rows {
        assembler.push(row?)?;
    }
    Ok(assembler.finish())
}

#[cfg(test)]
#[path = "tests/assemble_tests.rs"]
mod tests;
