//! Common error types for musicat

use thiserror::Error;

/// Common result type for musicat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the catalog service
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Write would duplicate a unique value or an existing association
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unit of work did not finish within its deadline
    #[error("Timed out: {0}")]
    Timeout(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Classify a failed write.
    ///
    /// Constraint violations are caller mistakes, not storage failures:
    /// a unique violation becomes `Conflict`, a foreign-key violation
    /// (reference to a missing row) becomes `InvalidInput`. Everything
    /// else stays a `Database` error.
    pub fn from_write(err: sqlx::Error, what: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Error::Conflict(format!("{} already exists", what));
            }
            if db_err.is_foreign_key_violation() {
                return Error::InvalidInput(format!("{} references a missing row", what));
            }
        }
        Error::Database(err)
    }
}
