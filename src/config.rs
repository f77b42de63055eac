// src/config.rs
use crate::domain::errors::DomainError;
use crate::domain::slug::{MaxLength, Separator, SlugConfig};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug_separator: String,
    slug_max_length: usize,
    slug_language: Option<String>,
    slug_enforce_uniqueness: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Slug(#[from] DomainError),
}

fn default_database_url() -> String {
    "sqlite::memory:".into()
}

fn default_max_connections() -> u32 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            database_max_connections: default_max_connections(),
            slug_separator: Separator::DEFAULT.into(),
            slug_max_length: MaxLength::DEFAULT,
            slug_language: None,
            slug_enforce_uniqueness: false,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}"
                ))
            })?,
            None => default_max_connections(),
        };

        let slug_separator = lookup("SLUG_SEPARATOR").unwrap_or_else(|| Separator::DEFAULT.into());
        Separator::new(slug_separator.as_str())?;

        let slug_max_length = match lookup("SLUG_MAX_LENGTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!("SLUG_MAX_LENGTH must be an integer, got {raw:?}"))
            })?,
            None => MaxLength::DEFAULT,
        };
        MaxLength::new(slug_max_length)?;

        let slug_language = lookup("SLUG_LANGUAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let slug_enforce_uniqueness = lookup("SLUG_ENFORCE_UNIQUENESS")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            database_max_connections,
            slug_separator,
            slug_max_length,
            slug_language,
            slug_enforce_uniqueness,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn slug_enforce_uniqueness(&self) -> bool {
        self.slug_enforce_uniqueness
    }

    /// Slug settings for a record type slugging `sources` into `target_field`.
    pub fn slug_config<I, S>(&self, sources: I, target_field: &str) -> Result<SlugConfig, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = SlugConfig::builder()
            .generate_slugs_from(sources)
            .save_slugs_to(target_field)
            .slug_with_separator(self.slug_separator.as_str())
            .slug_should_be_no_longer_than(self.slug_max_length);
        if let Some(language) = &self.slug_language {
            builder = builder.slug_with_language(language.as_str());
        }
        if self.slug_enforce_uniqueness {
            builder = builder.enforce_uniqueness();
        }
        Ok(builder.build()?)
    }
}
