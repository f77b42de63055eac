// src/domain/slug/mapping.rs
use crate::domain::errors::{DomainError, DomainResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered source-attribute → slug mapping stored in a record's target field.
///
/// Serialized as a JSON object whose key order follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlugMapping(IndexMap<String, String>);

impl SlugMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attribute: impl Into<String>, slug: impl Into<String>) {
        self.0.insert(attribute.into(), slug.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|err| DomainError::Persistence(format!("encode slug mapping: {err}")))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| DomainError::Persistence(format!("decode slug mapping: {err}")))
    }
}

impl<K, V> FromIterator<(K, V)> for SlugMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A proposed slug and the attribute it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCandidate {
    pub attribute: String,
    pub value: String,
}

impl SlugCandidate {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}
