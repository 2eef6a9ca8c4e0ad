//! Repository Module
//!
//! Free functions over `&SqlitePool`, one module per table. Write paths that
//! span tables run inside a transaction.

// People
pub mod eater;

// Venues
pub mod dining_table;
pub mod restaurant;

// Bookings
pub mod reservation;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
