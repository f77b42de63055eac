// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                DomainError::Conflict("unique constraint violated".into())
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                DomainError::Validation(db_err.message().to_string())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::ColumnDecode { index, source } => {
            DomainError::Persistence(format!("column {index} could not be decoded: {source}"))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
