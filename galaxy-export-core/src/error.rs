use thiserror::Error;

/// The source database does not look the way this tool expects.
///
/// Every variant means the database was written by a client version whose
/// layout we do not understand, so none of them are recoverable.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("piece type id {id} used by '{release_key}' is not in the piece type catalog")]
    UnknownPieceType { release_key: String, id: i64 },

    #[error("value of '{piece_type}' for '{release_key}' is not valid JSON: {source}")]
    Decode {
        release_key: String,
        piece_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value of '{piece_type}' for '{release_key}' is a JSON {found}, expected an object")]
    NotAnObject {
        release_key: String,
        piece_type: String,
        found: &'static str,
    },

    #[error("'dlcs' of '{release_key}' is not a list")]
    DlcsNotAList { release_key: String },
}
