// src/application/commands/slugs/service.rs
use std::sync::Arc;

use crate::{application::ports::util::SlugGenerator, domain::slug::UniqueSlugResolver};

/// Builds the slug mapping for a record that is about to be saved.
pub struct SlugOrchestrator {
    pub(super) generator: Arc<dyn SlugGenerator>,
    pub(super) resolver: Arc<UniqueSlugResolver>,
}

impl SlugOrchestrator {
    pub fn new(generator: Arc<dyn SlugGenerator>, resolver: Arc<UniqueSlugResolver>) -> Self {
        Self {
            generator,
            resolver,
        }
    }
}
