// src/application/commands/slugs/orchestrate.rs
use super::SlugOrchestrator;
use crate::{
    application::error::ApplicationResult,
    domain::{
        record::{AttributeValues, RecordId},
        slug::{LookupScope, SaveEvent, SlugCandidate, SlugConfig, SlugMapping},
    },
};

impl SlugOrchestrator {
    /// Generate the slug mapping for `attributes` according to `config`.
    ///
    /// Returns `None` when the config disables generation for `event` or names
    /// no source attributes; the target field must then be left as it is.
    /// `record` is the id of the record being updated, if any, and is excluded
    /// from uniqueness searches.
    pub async fn orchestrate(
        &self,
        config: &SlugConfig,
        attributes: &AttributeValues,
        event: SaveEvent,
        record: Option<RecordId>,
    ) -> ApplicationResult<Option<SlugMapping>> {
        if !config.generates_on(event) || config.source_attributes().is_empty() {
            tracing::debug!(?event, target_field = %config.target_field(), "slug generation skipped");
            return Ok(None);
        }

        let mut mapping = SlugMapping::new();
        for attribute in config.source_attributes() {
            let source = attributes.get(attribute).map(String::as_str).unwrap_or_default();
            let slug = self.generator.slugify(
                source,
                config.separator(),
                config.max_length(),
                config.language(),
            );
            mapping.insert(attribute.as_str(), slug);
        }

        if !config.enforce_uniqueness() {
            return Ok(Some(mapping));
        }

        let scope = LookupScope {
            target_field: config.target_field(),
            separator: config.separator(),
            max_length: config.max_length(),
            exclude_record: record,
        };

        let mut unique = SlugMapping::new();
        for (attribute, slug) in mapping.iter() {
            let candidate = SlugCandidate::new(attribute, slug);
            let resolved = self.resolver.resolve(&candidate, &scope).await?;
            unique.insert(attribute, resolved);
        }

        Ok(Some(unique))
    }
}
