pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{AttributeValues, NewRecord, Record};
pub use repository::{RecordReadRepository, RecordWriteRepository};
pub use value_objects::{FieldName, RecordId};
