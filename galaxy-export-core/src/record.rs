use std::collections::HashMap;

use crate::catalog::piece;
use crate::platform::platform_of;
use crate::value::AttrValue;

/// All known metadata for one release key.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    release_key: String,
    attributes: HashMap<String, AttrValue>,
}

impl GameRecord {
    pub fn new(release_key: impl Into<String>) -> Self {
        Self {
            release_key: release_key.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn release_key(&self) -> &str {
        &self.release_key
    }

    pub fn platform(&self) -> &str {
        platform_of(&self.release_key)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Set an attribute, returning the previous value if there was one.
    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) -> Option<AttrValue> {
        self.attributes.insert(name.into(), value)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(piece::TITLE).and_then(AttrValue::as_text)
    }

    /// A record is an add-on when it names a parent game.
    pub fn has_parent(&self) -> bool {
        self.get(piece::PARENT).is_some_and(AttrValue::is_truthy)
    }
}
