// src/domain/slug/generator.rs
//! Text → slug normalization.
//!
//! Transliteration is handled by the `slug` crate (backed by `deunicode`),
//! preceded by a small table of language-specific substitutions where the
//! generic table picks the wrong spelling (German umlauts, Danish `ø`/`å`).

use std::borrow::Cow;

/// Normalize `source` into a slug joined by `separator` and at most
/// `max_length` bytes long.
///
/// An empty source yields an empty slug. The output never starts or ends with
/// the separator or with whitespace.
pub fn generate(source: &str, separator: &str, max_length: usize, language: Option<&str>) -> String {
    if source.is_empty() {
        return String::new();
    }

    let localized = localize(source, language);
    let hyphenated = slug::slugify(localized.as_ref());
    let joined = if separator == "-" {
        hyphenated
    } else {
        hyphenated.replace('-', separator)
    };

    let truncated = truncate_bytes(&joined, max_length);
    trim_tail(truncated, separator).to_owned()
}

/// Longest prefix of `value` that fits in `max_bytes` without splitting a char.
pub(crate) fn truncate_bytes(value: &str, max_bytes: usize) -> &str {
    if value.len() <= max_bytes {
        return value;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Strip trailing whitespace and any character of `separator`.
pub(crate) fn trim_tail<'a>(value: &'a str, separator: &str) -> &'a str {
    value.trim_end_matches(|c: char| c.is_whitespace() || separator.contains(c))
}

fn localize<'a>(source: &'a str, language: Option<&str>) -> Cow<'a, str> {
    let rules = language.map(substitutions).unwrap_or_default();
    if rules.is_empty() || !source.chars().any(|c| rules.iter().any(|(from, _)| *from == c)) {
        return Cow::Borrowed(source);
    }

    let mut out = String::with_capacity(source.len() + 8);
    for c in source.chars() {
        match rules.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

const GERMAN: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
    ('ß', "ss"),
    ('ẞ', "SS"),
];

const DANO_NORWEGIAN: &[(char, &str)] = &[
    ('æ', "ae"),
    ('ø', "oe"),
    ('å', "aa"),
    ('Æ', "Ae"),
    ('Ø', "Oe"),
    ('Å', "Aa"),
];

const SWEDISH: &[(char, &str)] = &[
    ('ä', "a"),
    ('ö', "o"),
    ('å', "a"),
    ('Ä', "A"),
    ('Ö', "O"),
    ('Å', "A"),
];

/// Substitution table for a BCP 47 / POSIX style tag, matched on its primary
/// subtag (`de`, `de-AT` and `de_CH` all select German).
fn substitutions(language: &str) -> &'static [(char, &'static str)] {
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    match primary.as_str() {
        "de" => GERMAN,
        "da" | "nb" | "nn" | "no" => DANO_NORWEGIAN,
        "sv" => SWEDISH,
        _ => &[],
    }
}
