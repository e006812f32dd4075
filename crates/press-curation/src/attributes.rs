//! Attribute sets submitted with a create or update

use crate::error::{CurationError, Result};
use press_types::{ResourceId, Visibility};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parent monograph to attach to
pub const MONOGRAPH_ID: &str = "monograph_id";

pub const VISIBILITY: &str = "visibility";

pub const TITLE: &str = "title";

/// String-keyed attribute set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Remove a key, returning its value
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A string attribute; `None` when absent
    pub fn string(&self, key: &str) -> Result<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(CurationError::invalid(key, format!("expected a string, got {}", other))),
        }
    }

    /// The `visibility` attribute, parsed
    pub fn visibility(&self) -> Result<Option<Visibility>> {
        self.string(VISIBILITY)?
            .map(|raw| {
                raw.parse::<Visibility>()
                    .map_err(|e| CurationError::invalid(VISIBILITY, e.to_string()))
            })
            .transpose()
    }

    /// Remove `monograph_id` and read it as an identifier.
    ///
    /// Strings and numbers are accepted; anything else is invalid.
    pub fn take_monograph_id(&mut self) -> Result<Option<ResourceId>> {
        match self.take(MONOGRAPH_ID) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(ResourceId::new(s))),
            Some(Value::Number(n)) => Ok(Some(ResourceId::new(n.to_string()))),
            Some(other) => Err(CurationError::invalid(
                MONOGRAPH_ID,
                format!("expected an identifier, got {}", other),
            )),
        }
    }
}

impl FromIterator<(String, Value)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
