use crate::domain::record::Record;
use crate::domain::slug::SlugMapping;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDto {
    pub id: i64,
    pub attributes: IndexMap<String, String>,
    pub slugs: IndexMap<String, SlugMapping>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self {
            id: record.id.into(),
            attributes: record.attributes,
            slugs: record.slugs,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl RecordDto {
    pub fn slug(&self, target_field: &str, attribute: &str) -> Option<&str> {
        self.slugs.get(target_field).and_then(|mapping| mapping.get(attribute))
    }
}
