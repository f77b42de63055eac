// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl record_slugs::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        crate::support::mocks::time::fixed_now()
    }
}

/// Passes the source through untouched, so tests control candidates exactly.
#[derive(Clone)]
pub struct DummySlug;

impl record_slugs::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str, _separator: &str, _max_length: usize, _language: Option<&str>) -> String {
        s.to_string()
    }
}
