// src/infrastructure/repositories/sqlite_record.rs
use super::{json_fragment, map_sqlx};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::record::{
    AttributeValues, FieldName, NewRecord, Record, RecordId, RecordReadRepository,
    RecordWriteRepository,
};
use crate::domain::slug::{SlugLookup, SlugMapping};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};
use std::sync::Arc;

const RESERVED_COLUMNS: [&str; 4] = ["id", "attributes", "created_at", "updated_at"];

/// Records stored in one SQLite table: `attributes` holds the attribute map as
/// JSON and every slug target field gets its own nullable JSON column.
#[derive(Clone)]
pub struct SqliteRecordRepository {
    pool: Arc<SqlitePool>,
    table: FieldName,
    slug_columns: Vec<FieldName>,
}

impl SqliteRecordRepository {
    pub fn new(
        pool: Arc<SqlitePool>,
        table: FieldName,
        slug_columns: Vec<FieldName>,
    ) -> DomainResult<Self> {
        for (index, column) in slug_columns.iter().enumerate() {
            if RESERVED_COLUMNS.contains(&column.as_str()) {
                return Err(DomainError::Validation(format!(
                    "slug column {column} clashes with a reserved column"
                )));
            }
            if slug_columns[..index].contains(column) {
                return Err(DomainError::Validation(format!(
                    "slug column {column} listed more than once"
                )));
            }
        }

        Ok(Self {
            pool,
            table,
            slug_columns,
        })
    }

    /// Create the backing table if it does not exist yet.
    pub async fn ensure_schema(&self) -> DomainResult<()> {
        let mut ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY AUTOINCREMENT, attributes TEXT NOT NULL",
            self.table
        );
        for column in &self.slug_columns {
            ddl.push_str(", ");
            ddl.push_str(column.as_str());
            ddl.push_str(" TEXT");
        }
        ddl.push_str(", created_at TEXT NOT NULL, updated_at TEXT NOT NULL)");

        sqlx::query(&ddl)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    fn slug_column(&self, target_field: &str) -> DomainResult<&FieldName> {
        self.slug_columns
            .iter()
            .find(|column| column.as_str() == target_field)
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "table {} has no slug column {target_field}",
                    self.table
                ))
            })
    }

    /// Slug columns in declaration order, each paired with its encoded mapping.
    fn encode_slugs(
        &self,
        slugs: &IndexMap<String, SlugMapping>,
    ) -> DomainResult<Vec<(&FieldName, Option<String>)>> {
        for field in slugs.keys() {
            self.slug_column(field)?;
        }
        self.slug_columns
            .iter()
            .map(|column| {
                let encoded = slugs
                    .get(column.as_str())
                    .map(SlugMapping::to_json)
                    .transpose()?;
                Ok((column, encoded))
            })
            .collect()
    }

    fn decode_row(&self, row: &SqliteRow) -> DomainResult<Record> {
        let id: i64 = row.try_get("id").map_err(map_sqlx)?;
        let raw_attributes: String = row.try_get("attributes").map_err(map_sqlx)?;
        let attributes: AttributeValues = serde_json::from_str(&raw_attributes)
            .map_err(|err| DomainError::Persistence(format!("decode attributes: {err}")))?;

        let mut slugs = IndexMap::new();
        for column in &self.slug_columns {
            let raw: Option<String> = row.try_get(column.as_str()).map_err(map_sqlx)?;
            let Some(raw) = raw else {
                continue;
            };
            match SlugMapping::from_json(&raw) {
                Ok(mapping) => {
                    slugs.insert(column.as_str().to_owned(), mapping);
                }
                Err(err) => {
                    tracing::warn!(id, column = %column, error = %err, "ignoring undecodable slug column");
                }
            }
        }

        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_sqlx)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(map_sqlx)?;

        Ok(Record {
            id: RecordId::new(id)?,
            attributes,
            slugs,
            created_at,
            updated_at,
        })
    }
}

fn encode_attributes(attributes: &AttributeValues) -> DomainResult<String> {
    serde_json::to_string(attributes)
        .map_err(|err| DomainError::Persistence(format!("encode attributes: {err}")))
}

/// Escape `%`, `_` and `\` for a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl RecordWriteRepository for SqliteRecordRepository {
    async fn insert(&self, record: NewRecord) -> DomainResult<Record> {
        let attributes = encode_attributes(&record.attributes)?;
        let slugs = self.encode_slugs(&record.slugs)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("INSERT INTO {} (attributes", self.table));
        for (column, _) in &slugs {
            builder.push(", ");
            builder.push(column.as_str());
        }
        builder.push(", created_at, updated_at) VALUES (");
        {
            let mut values = builder.separated(", ");
            values.push_bind(attributes);
            for (_, encoded) in slugs {
                values.push_bind(encoded);
            }
            values.push_bind(record.created_at);
            values.push_bind(record.updated_at);
        }
        builder.push(") RETURNING id");

        let id: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        let NewRecord {
            attributes,
            slugs,
            created_at,
            updated_at,
        } = record;

        Ok(Record {
            id: RecordId::new(id)?,
            attributes,
            slugs,
            created_at,
            updated_at,
        })
    }

    async fn update(&self, record: Record) -> DomainResult<Record> {
        let attributes = encode_attributes(&record.attributes)?;
        let slugs = self.encode_slugs(&record.slugs)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("UPDATE {} SET attributes = ", self.table));
        builder.push_bind(attributes);
        for (column, encoded) in slugs {
            builder.push(", ");
            builder.push(column.as_str());
            builder.push(" = ");
            builder.push_bind(encoded);
        }
        builder.push(", updated_at = ");
        builder.push_bind(record.updated_at);
        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(record.id));

        let result = builder
            .build()
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("record {} not found", record.id)));
        }

        Ok(record)
    }
}

#[async_trait]
impl RecordReadRepository for SqliteRecordRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Record>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT * FROM {} WHERE id = ", self.table));
        builder.push_bind(i64::from(id));

        let row = builder
            .build()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| self.decode_row(&row)).transpose()
    }
}

#[async_trait]
impl SlugLookup for SqliteRecordRepository {
    async fn find_stored(
        &self,
        target_field: &FieldName,
        needle: &str,
        exclude: Option<RecordId>,
    ) -> DomainResult<Vec<String>> {
        let column = self.slug_column(target_field.as_str())?;
        let pattern = format!("%{}%", escape_like(&json_fragment(needle)));

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {column} FROM {} WHERE {column} LIKE ",
            self.table
        ));
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\'");
        if let Some(id) = exclude {
            builder.push(" AND id <> ");
            builder.push_bind(i64::from(id));
        }

        builder
            .build_query_scalar::<String>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("a_b%c\\d"), "a\\_b\\%c\\\\d");
        assert_eq!(escape_like("plain-slug"), "plain-slug");
    }
}
