//! Storage layer errors

use thiserror::Error;

/// Errors that can occur in the storage layer.
///
/// Absence of a record is not an error: lookups return `Option` and
/// mutations return modified counts, so these variants only cover
/// operational failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error (query failure, constraint violation)
    #[error("Database error: {0}")]
    Database(String),

    /// Connection error (store unreachable, pool exhausted)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Deserialization error (reading a stored row back into the domain)
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => StoreError::Connection(e.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Connection(err.to_string())
            },
            sqlx::Error::Database(db_err) => StoreError::Database(db_err.to_string()),
            _ => StoreError::Database(err.to_string()),
        }
    }
}
