// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use record_slugs::application::ports::{time::Clock, util::SlugGenerator};
use record_slugs::application::services::ApplicationServices;
use record_slugs::domain::record::{FieldName, RecordReadRepository, RecordWriteRepository};
use record_slugs::domain::slug::{SlugConfig, SlugConfigBuilder, SlugLookup};
use record_slugs::infrastructure::database;
use record_slugs::infrastructure::repositories::{InMemoryRecordRepository, SqliteRecordRepository};
use record_slugs::infrastructure::util::DefaultSlugGenerator;

/// Config slugging `sources` into the `slugs` field, adjusted by `tweak`.
pub fn slug_config(sources: &[&str], tweak: impl FnOnce(SlugConfigBuilder) -> SlugConfigBuilder) -> SlugConfig {
    tweak(
        SlugConfig::builder()
            .generate_slugs_from(sources.iter().copied())
            .save_slugs_to("slugs"),
    )
    .build()
    .expect("valid slug config")
}

fn services_over<R>(repo: Arc<R>, config: SlugConfig) -> ApplicationServices
where
    R: RecordWriteRepository + RecordReadRepository + SlugLookup + 'static,
{
    let write: Arc<dyn RecordWriteRepository> = repo.clone();
    let read: Arc<dyn RecordReadRepository> = repo.clone();
    let lookup: Arc<dyn SlugLookup> = repo;
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    ApplicationServices::new(write, read, lookup, clock, slugger, config)
}

pub fn memory_services(config: SlugConfig) -> (Arc<InMemoryRecordRepository>, ApplicationServices) {
    let repo = Arc::new(InMemoryRecordRepository::new());
    let services = services_over(Arc::clone(&repo), config);
    (repo, services)
}

pub async fn sqlite_repo(slug_columns: &[&str]) -> Arc<SqliteRecordRepository> {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory sqlite");
    let columns = slug_columns
        .iter()
        .map(|c| FieldName::new(*c).expect("column name"))
        .collect();
    let repo = SqliteRecordRepository::new(
        Arc::new(pool),
        FieldName::new("test_model").expect("table name"),
        columns,
    )
    .expect("repository");
    repo.ensure_schema().await.expect("schema");
    Arc::new(repo)
}

pub async fn sqlite_services(config: SlugConfig) -> (Arc<SqliteRecordRepository>, ApplicationServices) {
    let repo = sqlite_repo(&[config.target_field().as_str()]).await;
    let services = services_over(Arc::clone(&repo), config);
    (repo, services)
}
