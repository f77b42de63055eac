// src/domain/slug/lookup.rs
use crate::domain::errors::DomainResult;
use crate::domain::record::{FieldName, RecordId};
use crate::domain::slug::mapping::SlugMapping;
use async_trait::async_trait;

/// Where a uniqueness search runs and how suffixes are shaped.
#[derive(Debug, Clone, Copy)]
pub struct LookupScope<'a> {
    pub target_field: &'a FieldName,
    pub separator: &'a str,
    pub max_length: usize,
    /// Record being updated; its own stored slugs never count as collisions.
    pub exclude_record: Option<RecordId>,
}

/// Read access to previously stored slug mappings.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Raw serialized mappings stored in `target_field` that contain `needle`.
    ///
    /// May over-match: exactness is checked after decoding.
    async fn find_stored(
        &self,
        target_field: &FieldName,
        needle: &str,
        exclude: Option<RecordId>,
    ) -> DomainResult<Vec<String>>;

    /// Highest suffix already taken in the family of `base` under
    /// `attribute_key`, or `None` when no member of the family is stored.
    ///
    /// Stores without substring search can override this with their own scan.
    async fn find_max_suffix(
        &self,
        scope: &LookupScope<'_>,
        attribute_key: &str,
        base: &str,
    ) -> DomainResult<Option<u64>> {
        let rows = self
            .find_stored(scope.target_field, base, scope.exclude_record)
            .await?;
        Ok(max_family_suffix(
            rows.iter().map(String::as_str),
            attribute_key,
            base,
            scope.separator,
        ))
    }
}

/// Decode `rows` and return the largest family suffix found at `attribute_key`.
/// Rows that fail to decode are skipped.
pub fn max_family_suffix<'a>(
    rows: impl IntoIterator<Item = &'a str>,
    attribute_key: &str,
    base: &str,
    separator: &str,
) -> Option<u64> {
    let mut max = None;
    for raw in rows {
        let mapping = match SlugMapping::from_json(raw) {
            Ok(mapping) => mapping,
            Err(err) => {
                tracing::warn!(error = %err, "skipping undecodable slug mapping");
                continue;
            }
        };
        let Some(value) = mapping.get(attribute_key) else {
            continue;
        };
        if let Some(suffix) = family_suffix(value, base, separator) {
            max = max.max(Some(suffix));
        }
    }
    max
}

/// Suffix of `value` within the family of `base`.
///
/// `base` itself is suffix 0 and `base<sep><digits>` is `digits`. An empty base
/// (left over after truncating for a long suffix) owns the bare digit strings.
pub fn family_suffix(value: &str, base: &str, separator: &str) -> Option<u64> {
    if value.is_empty() {
        return None;
    }
    if base.is_empty() {
        return parse_digits(value);
    }

    let rest = value.strip_prefix(base)?;
    if rest.is_empty() {
        return Some(0);
    }
    parse_digits(rest.strip_prefix(separator)?)
}

fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
