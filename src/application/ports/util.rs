// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(
        &self,
        input: &str,
        separator: &str,
        max_length: usize,
        language: Option<&str>,
    ) -> String;
}
