// src/infrastructure/repositories/memory_record.rs
use super::json_fragment;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{
    FieldName, NewRecord, Record, RecordId, RecordReadRepository, RecordWriteRepository,
};
use crate::domain::slug::SlugLookup;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// Process-local record store.
///
/// Serves hosts without a database and doubles as a key-value style lookup:
/// searches scan every stored mapping.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    inner: Mutex<State>,
}

#[derive(Default)]
struct State {
    last_id: i64,
    records: BTreeMap<i64, Record>,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> DomainResult<MutexGuard<'_, State>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Persistence("in-memory record store poisoned".into()))
    }
}

#[async_trait]
impl RecordWriteRepository for InMemoryRecordRepository {
    async fn insert(&self, record: NewRecord) -> DomainResult<Record> {
        let mut state = self.state()?;
        state.last_id += 1;
        let id = state.last_id;
        let NewRecord {
            attributes,
            slugs,
            created_at,
            updated_at,
        } = record;

        let created = Record {
            id: RecordId::new(id)?,
            attributes,
            slugs,
            created_at,
            updated_at,
        };
        state.records.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, record: Record) -> DomainResult<Record> {
        let mut state = self.state()?;
        let slot = state
            .records
            .get_mut(&i64::from(record.id))
            .ok_or_else(|| DomainError::NotFound(format!("record {} not found", record.id)))?;
        *slot = record.clone();
        Ok(record)
    }
}

#[async_trait]
impl RecordReadRepository for InMemoryRecordRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Record>> {
        Ok(self.state()?.records.get(&i64::from(id)).cloned())
    }
}

#[async_trait]
impl SlugLookup for InMemoryRecordRepository {
    async fn find_stored(
        &self,
        target_field: &FieldName,
        needle: &str,
        exclude: Option<RecordId>,
    ) -> DomainResult<Vec<String>> {
        let fragment = json_fragment(needle);
        let state = self.state()?;

        let mut rows = Vec::new();
        for record in state.records.values() {
            if exclude == Some(record.id) {
                continue;
            }
            let Some(mapping) = record.slugs_for(target_field.as_str()) else {
                continue;
            };
            let raw = mapping.to_json()?;
            if raw.contains(&fragment) {
                rows.push(raw);
            }
        }
        Ok(rows)
    }
}
