//! Error handling utilities for repositories

use confession_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if let Some(constraint) = db_err.constraint() {
            return DomainError::DatabaseError(format!("constraint {constraint} violated"));
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Convert a numeric query argument to a slice bound, treating negatives as zero
pub fn to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}
