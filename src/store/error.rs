use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the data access layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database unreachable or authentication failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Connection pool could not hand out a connection
    #[error("Pool error: {0}")]
    Pool(String),

    /// SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid input, e.g. a malformed connection string
    #[error("Validation error: {0}")]
    Validation(String),

    /// A message referenced a group that does not exist
    #[error("Group {0} does not exist")]
    GroupNotFound(i32),
}

impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        if err.is_closed() {
            return StoreError::Connection(err.to_string());
        }

        StoreError::Database(format!("{:?}", err))
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Pool(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_not_found_message() {
        let err = StoreError::GroupNotFound(42);
        assert_eq!(err.to_string(), "Group 42 does not exist");
    }

    #[test]
    fn test_validation_error() {
        let err = StoreError::Validation("bad port".to_string());
        assert!(err.to_string().contains("Validation error"));
        assert!(err.to_string().contains("bad port"));
    }

    #[test]
    fn test_pool_error() {
        let err = StoreError::Pool("timed out".to_string());
        assert!(err.to_string().starts_with("Pool error"));
    }
}
