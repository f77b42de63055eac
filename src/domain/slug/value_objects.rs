// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// String joining word fragments and a base to its numeric suffix.
///
/// Alphanumeric characters are rejected: they would survive normalization and
/// make a slug indistinguishable from its own separator runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator(String);

impl Separator {
    pub const DEFAULT: &'static str = "-";

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("separator cannot be empty".into()));
        }
        if value.chars().any(char::is_alphanumeric) {
            return Err(DomainError::Validation(format!(
                "separator {value:?} must not contain alphanumeric characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upper bound, in bytes, on a stored slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxLength(usize);

impl MaxLength {
    pub const DEFAULT: usize = 255;

    pub fn new(value: usize) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::Validation(
                "maximum slug length must be at least 1".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MaxLength {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<MaxLength> for usize {
    fn from(value: MaxLength) -> Self {
        value.0
    }
}
