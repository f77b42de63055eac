// src/application/commands/records/service.rs
use std::sync::Arc;

use crate::{
    application::{commands::slugs::SlugOrchestrator, ports::time::Clock},
    domain::{
        record::{RecordReadRepository, RecordWriteRepository},
        slug::SlugConfig,
    },
};

/// Saves records, running slug generation where a framework would fire its
/// before-create and before-update hooks.
pub struct RecordCommandService {
    pub(super) write_repo: Arc<dyn RecordWriteRepository>,
    pub(super) read_repo: Arc<dyn RecordReadRepository>,
    pub(super) slugs: Arc<SlugOrchestrator>,
    pub(super) slug_config: Arc<SlugConfig>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RecordCommandService {
    pub fn new(
        write_repo: Arc<dyn RecordWriteRepository>,
        read_repo: Arc<dyn RecordReadRepository>,
        slugs: Arc<SlugOrchestrator>,
        slug_config: Arc<SlugConfig>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugs,
            slug_config,
            clock,
        }
    }
}
