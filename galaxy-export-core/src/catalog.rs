//! The piece-type catalog and the normalized rows streamed out of the database.

use std::collections::HashMap;

use crate::error::SchemaError;
use crate::value::AttrValue;

/// Names of the piece types this tool interprets.
pub mod piece {
    pub const TITLE: &str = "title";
    pub const DLCS: &str = "dlcs";
    pub const PARENT: &str = "parent";
    pub const ACHIEVEMENTS: &str = "myAchievementsCount";
    /// Not a real piece type: filled in from the user's tag assignments.
    pub const TAGS: &str = "tags";
}

/// Maps numeric piece-type ids to their names. Loaded once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct PieceTypeCatalog {
    names: HashMap<i64, String>,
}

impl PieceTypeCatalog {
    pub fn name(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Resolve an id, failing when the database uses a type we never loaded.
    pub fn resolve(&self, release_key: &str, id: i64) -> Result<&str, SchemaError> {
        self.name(id).ok_or_else(|| SchemaError::UnknownPieceType {
            release_key: release_key.to_string(),
            id,
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i64, String)> for PieceTypeCatalog {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// One (release key, piece type, value) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceRow {
    pub release_key: String,
    pub piece_type: String,
    pub value: AttrValue,
}

impl PieceRow {
    pub fn new(
        release_key: impl Into<String>,
        piece_type: impl Into<String>,
        value: AttrValue,
    ) -> Self {
        Self {
            release_key: release_key.into(),
            piece_type: piece_type.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_and_unknown_ids() {
        let catalog: PieceTypeCatalog = [(1, "title".to_string()), (2, "dlcs".to_string())]
            .into_iter()
            .collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("steam_1", 2).unwrap(), "dlcs");

        let err = catalog.resolve("steam_1", 99).unwrap_err();
        assert!(matches!(err, SchemaError::UnknownPieceType { id: 99, .. }));
    }
}
