//! Core model for exporting a GOG Galaxy library.
//!
//! Turns the client's row-per-attribute piece storage into one typed record
//! per release, then decides which records belong on which platform sheet.
//! Nothing in this crate touches the filesystem or the database.

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod platform;
pub mod record;
pub mod router;
pub mod value;

pub use assemble::{DlcIdSet, GameAssembler, GameLibrary, assemble};
pub use catalog::{PieceRow, PieceTypeCatalog, piece};
pub use error::SchemaError;
pub use platform::{GENERIC_PLATFORM, display_name, known_platforms, platform_of};
pub use record::GameRecord;
pub use router::{PlatformGroup, PlatformRouter, Routing, SkipCounts};
pub use value::{AttrValue, Scalar, decode_piece_value, unwrap_singleton};

/// Which user tags, if any, to pull into the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagSelection {
    /// No tag column at all.
    #[default]
    Disabled,
    /// Every tag the user assigned.
    All,
    /// Only tags whose name matches exactly.
    Only(Vec<String>),
}

impl TagSelection {
    /// `None` means the option was not given; an empty list means "all tags".
    pub fn from_arg(tags: Option<Vec<String>>) -> Self {
        match tags {
            None => Self::Disabled,
            Some(tags) if tags.is_empty() => Self::All,
            Some(tags) => Self::Only(tags),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Options that control what ends up in the report.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Platform keys to keep. `None` keeps every platform.
    pub platforms: Option<Vec<String>>,

    pub tags: TagSelection,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platforms(mut self, platforms: Option<Vec<String>>) -> Self {
        self.platforms = platforms;
        self
    }

    pub fn tags(mut self, tags: TagSelection) -> Self {
        self.tags = tags;
        self
    }

    pub fn router(&self) -> PlatformRouter {
        PlatformRouter::new(self.platforms.clone())
    }
}
