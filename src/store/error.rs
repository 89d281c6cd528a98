use thiserror::Error;

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for message store operations
#[derive(Debug, Error)]
pub enum Error {
    /// Validation error - invalid configuration or connection string
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Connection error - database unreachable, authentication failure or pool timeout
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Database error - a statement failed after a connection was obtained
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl Error {
    /// Short name of the error variant, reported by the connectivity probe
    pub fn kind(&self) -> &'static str {
        match self {
            Error::ValidationError(_) => "ValidationError",
            Error::ConnectionError(_) => "ConnectionError",
            Error::DatabaseError(_) => "DatabaseError",
        }
    }
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for Error {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return Error::DatabaseError(format!("{}: {}", db_error.code().code(), db_error.message()));
        }

        if err.is_closed() {
            return Error::ConnectionError(err.to_string());
        }

        Error::DatabaseError(format!("{:?}", err))
    }
}

/// Checking a connection out of the pool is the connect step, so every pool
/// failure is a connection failure.
impl From<deadpool_postgres::PoolError> for Error {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Error::ConnectionError(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for Error {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        Error::ConnectionError(err.to_string())
    }
}
