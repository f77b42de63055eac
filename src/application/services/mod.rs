// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{records::RecordCommandService, slugs::SlugOrchestrator},
        ports::{ClockPort, SlugGeneratorPort},
    },
    domain::{
        record::{RecordReadRepository, RecordWriteRepository},
        slug::{SlugConfig, SlugLookup, UniqueSlugResolver},
    },
};

pub struct ApplicationServices {
    pub record_commands: Arc<RecordCommandService>,
    pub slug_orchestrator: Arc<SlugOrchestrator>,
}

impl ApplicationServices {
    pub fn new(
        record_write_repo: Arc<dyn RecordWriteRepository>,
        record_read_repo: Arc<dyn RecordReadRepository>,
        slug_lookup: Arc<dyn SlugLookup>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        slug_config: SlugConfig,
    ) -> Self {
        let resolver = Arc::new(UniqueSlugResolver::new(Arc::clone(&slug_lookup)));
        let slug_orchestrator = Arc::new(SlugOrchestrator::new(
            Arc::clone(&slugger),
            Arc::clone(&resolver),
        ));

        let record_commands = Arc::new(RecordCommandService::new(
            Arc::clone(&record_write_repo),
            Arc::clone(&record_read_repo),
            Arc::clone(&slug_orchestrator),
            Arc::new(slug_config),
            Arc::clone(&clock),
        ));

        Self {
            record_commands,
            slug_orchestrator,
        }
    }
}
