// tests/support/mocks/lookup.rs
use async_trait::async_trait;
use record_slugs::domain::errors::{DomainError, DomainResult};
use record_slugs::domain::record::{FieldName, RecordId};
use record_slugs::domain::slug::SlugLookup;
use std::sync::Mutex;

/// Lookup whose storage is unreachable.
pub struct FailingLookup;

#[async_trait]
impl SlugLookup for FailingLookup {
    async fn find_stored(
        &self,
        _target_field: &FieldName,
        _needle: &str,
        _exclude: Option<RecordId>,
    ) -> DomainResult<Vec<String>> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }
}

/// Returns the same raw rows for every search and records the needles asked for.
#[derive(Default)]
pub struct StaticRowsLookup {
    pub rows: Vec<String>,
    pub needles: Mutex<Vec<String>>,
}

impl StaticRowsLookup {
    pub fn new(rows: &[&str]) -> Self {
        Self {
            rows: rows.iter().map(|r| (*r).to_owned()).collect(),
            needles: Mutex::new(Vec::new()),
        }
    }

    pub fn needles(&self) -> Vec<String> {
        self.needles.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugLookup for StaticRowsLookup {
    async fn find_stored(
        &self,
        _target_field: &FieldName,
        needle: &str,
        _exclude: Option<RecordId>,
    ) -> DomainResult<Vec<String>> {
        self.needles.lock().unwrap().push(needle.to_owned());
        Ok(self.rows.clone())
    }
}
