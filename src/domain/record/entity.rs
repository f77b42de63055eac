// src/domain/record/entity.rs
use crate::domain::record::value_objects::{FieldName, RecordId};
use crate::domain::slug::SlugMapping;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Current attribute values of a record, keyed by attribute name.
pub type AttributeValues = IndexMap<String, String>;

#[derive(Debug, Clone)]
pub struct Record {
    pub id: RecordId,
    pub attributes: AttributeValues,
    /// Slug mappings keyed by the target field they are stored in.
    pub slugs: IndexMap<String, SlugMapping>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn slugs_for(&self, target_field: &str) -> Option<&SlugMapping> {
        self.slugs.get(target_field)
    }

    pub fn merge_attributes(&mut self, changes: AttributeValues, now: DateTime<Utc>) {
        for (name, value) in changes {
            self.attributes.insert(name, value);
        }
        self.updated_at = now;
    }

    pub fn attach_slugs(&mut self, target_field: &FieldName, mapping: SlugMapping, now: DateTime<Utc>) {
        self.slugs.insert(target_field.as_str().to_owned(), mapping);
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewRecord {
    pub attributes: AttributeValues,
    pub slugs: IndexMap<String, SlugMapping>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewRecord {
    pub fn new(attributes: AttributeValues, now: DateTime<Utc>) -> Self {
        Self {
            attributes,
            slugs: IndexMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn attach_slugs(&mut self, target_field: &FieldName, mapping: SlugMapping) {
        self.slugs.insert(target_field.as_str().to_owned(), mapping);
    }
}
