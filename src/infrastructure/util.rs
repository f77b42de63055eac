// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::generate;

/// Slug generator backed by the `slug` crate's transliteration table.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(
        &self,
        input: &str,
        separator: &str,
        max_length: usize,
        language: Option<&str>,
    ) -> String {
        generate(input, separator, max_length, language)
    }
}
