//! Core error types for the expense calculator.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for personal expense operations.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated, e.g. an unknown category or person.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for stored values that cannot be decoded.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] uuid::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Self {
        Error::Validation(ValidationError::InvalidId(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_decimal_parse_error_maps_to_validation() {
        let err: Error = rust_decimal::Decimal::from_str("12,50").unwrap_err().into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::DecimalParse(_))
        ));
    }

    #[test]
    fn test_uuid_parse_error_maps_to_invalid_id() {
        let err: Error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err().into();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidId(_))));
    }

    #[test]
    fn test_not_found_message() {
        let err = Error::from(DatabaseError::NotFound("personal expense".to_string()));
        assert_eq!(
            err.to_string(),
            "Database operation failed: Record not found: personal expense"
        );
    }
}
