// src/domain/slug/services.rs
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::generator::{trim_tail, truncate_bytes};
use crate::domain::slug::lookup::{LookupScope, SlugLookup};
use crate::domain::slug::mapping::SlugCandidate;

/// Searches allowed per candidate before giving up.
///
/// The base only changes when the suffix gains a digit, so a resolve makes at
/// most one search per suffix width (20 for `u64`) plus the first one and
/// stays well under this cap.
pub const MAX_RESOLVE_ATTEMPTS: usize = 64;

/// Domain service that turns a candidate slug into one no stored record uses.
///
/// Not atomic: two saves racing on the same base can observe the same highest
/// suffix and pick the same value. Pair with a unique constraint in storage
/// when that matters.
pub struct UniqueSlugResolver {
    lookup: Arc<dyn SlugLookup>,
}

impl UniqueSlugResolver {
    pub fn new(lookup: Arc<dyn SlugLookup>) -> Self {
        Self { lookup }
    }

    pub async fn resolve(
        &self,
        candidate: &SlugCandidate,
        scope: &LookupScope<'_>,
    ) -> DomainResult<String> {
        if candidate.value.is_empty() {
            return Ok(String::new());
        }

        let attribute = candidate.attribute.as_str();
        let Some(taken) = self
            .lookup
            .find_max_suffix(scope, attribute, &candidate.value)
            .await?
        else {
            return Ok(candidate.value.clone());
        };

        let mut suffix = next_suffix(taken, &candidate.value)?;
        let mut searched = candidate.value.clone();

        // Each pass either returns or searches a base it has not seen yet, so
        // the family of the returned base is always known.
        for _ in 1..MAX_RESOLVE_ATTEMPTS {
            let base = fit_base(&candidate.value, suffix, scope)?;
            if base == searched {
                let slug = join(&base, scope.separator, suffix);
                tracing::debug!(attribute, slug = %slug, suffix, "resolved slug collision");
                return Ok(slug);
            }

            tracing::debug!(attribute, base = %base, suffix, "base truncated to fit suffix");
            if let Some(taken) = self.lookup.find_max_suffix(scope, attribute, &base).await? {
                if taken >= suffix {
                    suffix = next_suffix(taken, &base)?;
                }
            }
            searched = base;
        }

        Err(DomainError::SlugUnavailable(format!(
            "{attribute}: no free slug for {:?} after {MAX_RESOLVE_ATTEMPTS} searches",
            candidate.value
        )))
    }
}

fn next_suffix(taken: u64, base: &str) -> DomainResult<u64> {
    taken
        .checked_add(1)
        .ok_or_else(|| DomainError::SlugUnavailable(format!("suffix space exhausted for {base:?}")))
}

/// Longest prefix of `candidate` that leaves room for `<sep><suffix>`.
///
/// When the separator and suffix alone fill the budget the base is dropped and
/// the bare suffix is used instead.
fn fit_base(candidate: &str, suffix: u64, scope: &LookupScope<'_>) -> DomainResult<String> {
    let digits = suffix.to_string().len();
    let tail = scope.separator.len() + digits;

    if candidate.len() + tail <= scope.max_length {
        return Ok(candidate.to_owned());
    }
    if tail < scope.max_length {
        let cut = truncate_bytes(candidate, scope.max_length - tail);
        return Ok(trim_tail(cut, scope.separator).to_owned());
    }
    if digits <= scope.max_length {
        return Ok(String::new());
    }

    Err(DomainError::SlugUnavailable(format!(
        "suffix {suffix} does not fit in {} bytes",
        scope.max_length
    )))
}

fn join(base: &str, separator: &str, suffix: u64) -> String {
    if base.is_empty() {
        suffix.to_string()
    } else {
        format!("{base}{separator}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{FieldName, RecordId};
    use crate::domain::slug::mapping::SlugMapping;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Stores raw JSON rows and counts searches.
    #[derive(Default)]
    struct Rows {
        rows: Mutex<Vec<String>>,
        searches: Mutex<usize>,
    }

    impl Rows {
        fn with(values: &[&str]) -> Self {
            let rows = Self::default();
            for value in values {
                rows.push(value);
            }
            rows
        }

        fn push(&self, name_slug: &str) {
            let raw = SlugMapping::from_iter([("name", name_slug)]).to_json().unwrap();
            self.rows.lock().unwrap().push(raw);
        }
    }

    #[async_trait]
    impl SlugLookup for Rows {
        async fn find_stored(
            &self,
            _target_field: &FieldName,
            needle: &str,
            _exclude: Option<RecordId>,
        ) -> DomainResult<Vec<String>> {
            *self.searches.lock().unwrap() += 1;
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|raw| raw.contains(needle)).cloned().collect())
        }
    }

    async fn resolve_with(rows: Arc<Rows>, value: &str, max_length: usize) -> DomainResult<String> {
        let field = FieldName::new("slugs").unwrap();
        let scope = LookupScope {
            target_field: &field,
            separator: "-",
            max_length,
            exclude_record: None,
        };
        UniqueSlugResolver::new(rows)
            .resolve(&SlugCandidate::new("name", value), &scope)
            .await
    }

    #[tokio::test]
    async fn free_candidate_is_returned_unchanged() {
        let rows = Arc::new(Rows::with(&["other"]));
        assert_eq!(resolve_with(rows, "some-text", 255).await.unwrap(), "some-text");
    }

    #[tokio::test]
    async fn empty_candidate_skips_search() {
        let rows = Arc::new(Rows::with(&[""]));
        assert_eq!(resolve_with(Arc::clone(&rows), "", 255).await.unwrap(), "");
        assert_eq!(*rows.searches.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn exact_match_forces_first_suffix() {
        let rows = Arc::new(Rows::with(&["some-text-goes-here"]));
        assert_eq!(
            resolve_with(rows, "some-text-goes-here", 255).await.unwrap(),
            "some-text-goes-here-1"
        );
    }

    #[tokio::test]
    async fn picks_one_past_the_highest_suffix() {
        let rows = Arc::new(Rows::with(&["base", "base-1", "base-7", "base-goes-9"]));
        assert_eq!(resolve_with(rows, "base", 255).await.unwrap(), "base-8");
    }

    #[tokio::test]
    async fn truncates_base_to_make_room_for_suffix() {
        let rows = Arc::new(Rows::with(&["some-long-base"]));
        assert_eq!(resolve_with(rows, "some-long-base", 10).await.unwrap(), "some-lon-1");
    }

    #[tokio::test]
    async fn truncated_base_continues_its_own_sequence() {
        let rows = Arc::new(Rows::with(&["some-long", "some-lon-1", "some-lon-2"]));
        assert_eq!(resolve_with(rows, "some-long", 10).await.unwrap(), "some-lon-3");
    }

    #[tokio::test]
    async fn wider_suffix_shortens_base_again() {
        let stored: Vec<String> = std::iter::once("some-long".to_owned())
            .chain((1..=9).map(|n| format!("some-lon-{n}")))
            .collect();
        let refs: Vec<&str> = stored.iter().map(String::as_str).collect();
        let rows = Arc::new(Rows::with(&refs));
        assert_eq!(resolve_with(rows, "some-long", 10).await.unwrap(), "some-lo-10");
    }

    #[tokio::test]
    async fn trailing_separator_left_by_truncation_is_trimmed() {
        let rows = Arc::new(Rows::with(&["ab-cdef"]));
        // Budget for the base is 3 bytes: "ab-" trims to "ab".
        assert_eq!(resolve_with(rows, "ab-cdef", 5).await.unwrap(), "ab-1");
    }

    #[tokio::test]
    async fn tiny_budget_falls_back_to_bare_suffix() {
        let rows = Arc::new(Rows::with(&["abc"]));
        assert_eq!(resolve_with(Arc::clone(&rows), "abc", 2).await.unwrap(), "1");

        rows.push("1");
        assert_eq!(resolve_with(Arc::clone(&rows), "abc", 2).await.unwrap(), "2");

        let rows = Arc::new(Rows::with(&["a"]));
        assert_eq!(resolve_with(rows, "a", 1).await.unwrap(), "1");
    }

    #[tokio::test]
    async fn budget_too_small_for_suffix_is_an_error() {
        let stored: Vec<String> = std::iter::once("a".to_owned())
            .chain((1..=9).map(|n| n.to_string()))
            .collect();
        let refs: Vec<&str> = stored.iter().map(String::as_str).collect();
        let rows = Arc::new(Rows::with(&refs));
        let err = resolve_with(rows, "a", 1).await.unwrap_err();
        assert!(matches!(err, DomainError::SlugUnavailable(_)));
    }

    /// Reports a suffix one digit wider than the last on every search.
    #[derive(Default)]
    struct Widening {
        searches: Mutex<u32>,
    }

    #[async_trait]
    impl SlugLookup for Widening {
        async fn find_stored(
            &self,
            _target_field: &FieldName,
            needle: &str,
            _exclude: Option<RecordId>,
        ) -> DomainResult<Vec<String>> {
            let mut searches = self.searches.lock().unwrap();
            *searches += 1;
            let taken = 10u64.checked_pow(*searches).map_or(u64::MAX, |n| n - 1);
            let raw = SlugMapping::from_iter([("name", format!("{needle}-{taken}"))])
                .to_json()
                .unwrap();
            Ok(vec![raw])
        }
    }

    #[tokio::test]
    async fn searches_are_bounded_by_suffix_width() {
        let lookup = Arc::new(Widening::default());
        let field = FieldName::new("slugs").unwrap();
        let scope = LookupScope {
            target_field: &field,
            separator: "-",
            max_length: 255,
            exclude_record: None,
        };
        let candidate = SlugCandidate::new("name", "a".repeat(255));

        let err = UniqueSlugResolver::new(Arc::clone(&lookup) as Arc<dyn SlugLookup>)
            .resolve(&candidate, &scope)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::SlugUnavailable(_)));
        let searches = *lookup.searches.lock().unwrap() as usize;
        assert_eq!(searches, 20);
        assert!(searches < MAX_RESOLVE_ATTEMPTS);
    }

    #[tokio::test]
    async fn exhausted_suffix_space_is_an_error() {
        let last = format!("base-{}", u64::MAX);
        let rows = Arc::new(Rows::with(&["base", last.as_str()]));
        let err = resolve_with(rows, "base", 255).await.unwrap_err();
        assert!(matches!(err, DomainError::SlugUnavailable(_)));
    }
}
