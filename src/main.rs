use record_slugs::application::{
    commands::records::CreateRecordCommand,
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use record_slugs::config::AppConfig;
use record_slugs::domain::record::{FieldName, RecordReadRepository, RecordWriteRepository};
use record_slugs::domain::slug::SlugLookup;
use record_slugs::infrastructure::{
    database, repositories::SqliteRecordRepository, time::SystemClock, util::DefaultSlugGenerator,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SOURCE_ATTRIBUTE: &str = "title";
const TARGET_FIELD: &str = "slugs";

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let slug_config = config.slug_config([SOURCE_ATTRIBUTE], TARGET_FIELD)?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("opening database")?;
    let repo = Arc::new(SqliteRecordRepository::new(
        Arc::new(pool),
        FieldName::new("records")?,
        vec![slug_config.target_field().clone()],
    )?);
    repo.ensure_schema().await?;

    let write_repo: Arc<dyn RecordWriteRepository> = repo.clone();
    let read_repo: Arc<dyn RecordReadRepository> = repo.clone();
    let lookup: Arc<dyn SlugLookup> = repo;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(write_repo, read_repo, lookup, clock, slugger, slug_config);

    for title in std::env::args().skip(1) {
        let command = CreateRecordCommand::builder()
            .attribute(SOURCE_ATTRIBUTE, title)
            .build()
            .map_err(anyhow::Error::msg)?;
        let record = services.record_commands.create_record(command).await?;
        tracing::info!(id = record.id, "record saved");
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
