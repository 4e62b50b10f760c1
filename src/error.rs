//! Common error types for the SakeMap core

use thiserror::Error;

/// Common result type for SakeMap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by storage and configuration
///
/// Field-level validation failures are not represented here; they live in
/// [`crate::validation::ValidationErrors`] and only ever block submission.
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

    /// Insert of an identifier that is already registered
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Internal error (corrupt stored data, broken invariants)
    #[error("Internal error: {0}")]
    Internal(String),
}
