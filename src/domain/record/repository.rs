use crate::domain::errors::DomainResult;
use crate::domain::record::entity::{NewRecord, Record};
use crate::domain::record::value_objects::RecordId;
use async_trait::async_trait;

#[async_trait]
pub trait RecordWriteRepository: Send + Sync {
    async fn insert(&self, record: NewRecord) -> DomainResult<Record>;
    async fn update(&self, record: Record) -> DomainResult<Record>;
}

#[async_trait]
pub trait RecordReadRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Record>>;
}
