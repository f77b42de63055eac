// src/domain/slug/config.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::FieldName;
use crate::domain::slug::value_objects::{MaxLength, Separator};
use std::collections::HashSet;

/// Which save is in progress when slugs are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEvent {
    Create,
    Update,
}

/// Read-only description of how a record type derives its slugs.
#[derive(Debug, Clone)]
pub struct SlugConfig {
    source_attributes: Vec<String>,
    target_field: FieldName,
    separator: Separator,
    max_length: MaxLength,
    generate_on_create: bool,
    generate_on_update: bool,
    enforce_uniqueness: bool,
    language: Option<String>,
}

impl SlugConfig {
    pub fn builder() -> SlugConfigBuilder {
        SlugConfigBuilder::default()
    }

    pub fn source_attributes(&self) -> &[String] {
        &self.source_attributes
    }

    pub fn target_field(&self) -> &FieldName {
        &self.target_field
    }

    pub fn separator(&self) -> &str {
        self.separator.as_str()
    }

    pub fn max_length(&self) -> usize {
        self.max_length.get()
    }

    pub fn generate_on_create(&self) -> bool {
        self.generate_on_create
    }

    pub fn generate_on_update(&self) -> bool {
        self.generate_on_update
    }

    pub fn enforce_uniqueness(&self) -> bool {
        self.enforce_uniqueness
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn generates_on(&self, event: SaveEvent) -> bool {
        match event {
            SaveEvent::Create => self.generate_on_create,
            SaveEvent::Update => self.generate_on_update,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlugConfigBuilder {
    source_attributes: Vec<String>,
    target_field: Option<String>,
    separator: String,
    max_length: usize,
    generate_on_create: bool,
    generate_on_update: bool,
    enforce_uniqueness: bool,
    language: Option<String>,
}

impl Default for SlugConfigBuilder {
    fn default() -> Self {
        Self {
            source_attributes: Vec::new(),
            target_field: None,
            separator: Separator::DEFAULT.to_owned(),
            max_length: MaxLength::DEFAULT,
            generate_on_create: true,
            generate_on_update: true,
            enforce_uniqueness: false,
            language: None,
        }
    }
}

impl SlugConfigBuilder {
    pub fn generate_slugs_from<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn save_slugs_to(mut self, field: impl Into<String>) -> Self {
        self.target_field = Some(field.into());
        self
    }

    pub fn slug_with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn slug_should_be_no_longer_than(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn do_not_generate_slugs_on_create(mut self) -> Self {
        self.generate_on_create = false;
        self
    }

    pub fn do_not_generate_slugs_on_update(mut self) -> Self {
        self.generate_on_update = false;
        self
    }

    pub fn enforce_uniqueness(mut self) -> Self {
        self.enforce_uniqueness = true;
        self
    }

    pub fn slug_with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn build(self) -> DomainResult<SlugConfig> {
        let target_field = self
            .target_field
            .ok_or_else(|| DomainError::Validation("target field is required".into()))
            .and_then(FieldName::new)?;

        let mut seen = HashSet::new();
        for attribute in &self.source_attributes {
            if attribute.is_empty() {
                return Err(DomainError::Validation(
                    "source attribute names cannot be empty".into(),
                ));
            }
            if !seen.insert(attribute.as_str()) {
                return Err(DomainError::Validation(format!(
                    "source attribute {attribute:?} listed more than once"
                )));
            }
        }

        let language = self
            .language
            .map(|tag| tag.trim().to_owned())
            .filter(|tag| !tag.is_empty());

        Ok(SlugConfig {
            source_attributes: self.source_attributes,
            target_field,
            separator: Separator::new(self.separator)?,
            max_length: MaxLength::new(self.max_length)?,
            generate_on_create: self.generate_on_create,
            generate_on_update: self.generate_on_update,
            enforce_uniqueness: self.enforce_uniqueness,
            language,
        })
    }
}
