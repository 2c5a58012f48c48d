//! Custom error types for the common library
//!
//! This module defines the storage error type shared by every repository
//! backend of the movie catalog.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// A unique key is already taken
    #[error("{0} already exists")]
    Conflict(String),
}

impl DatabaseError {
    /// Map a query error, turning unique-key violations into [`DatabaseError::Conflict`]
    pub fn from_query(err: SqlxError, key: &str) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                DatabaseError::Conflict(key.to_string())
            }
            _ => DatabaseError::Query(err),
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_stay_query_errors() {
        let err = DatabaseError::from_query(SqlxError::RowNotFound, "abcde");
        assert!(matches!(err, DatabaseError::Query(SqlxError::RowNotFound)));
    }

    #[test]
    fn test_conflict_message_names_the_key() {
        let err = DatabaseError::Conflict("abcde".to_string());
        assert_eq!(err.to_string(), "abcde already exists");
    }
}
