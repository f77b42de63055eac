// src/infrastructure/repositories/mod.rs
mod error;
mod memory_record;
mod sqlite_record;

pub use error::map_sqlx;
pub use memory_record::InMemoryRecordRepository;
pub use sqlite_record::SqliteRecordRepository;

/// `needle` as it appears inside a serialized JSON string value, so substring
/// searches over stored mappings see the same escaping.
pub(crate) fn json_fragment(needle: &str) -> String {
    let quoted = serde_json::Value::String(needle.to_owned()).to_string();
    quoted[1..quoted.len() - 1].to_owned()
}
