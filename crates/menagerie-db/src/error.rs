//! Error types for database operations.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Native DB error.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Player not found.
    #[error("Player not found: {0}")]
    NotFound(String),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;
