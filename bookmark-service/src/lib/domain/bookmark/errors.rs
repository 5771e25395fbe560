use thiserror::Error;

use crate::domain::ownership::AccessDenied;

/// Error for BookmarkId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookmarkIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for bookmark field validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookmarkFieldError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Top-level error for bookmark operations
#[derive(Debug, Clone, Error)]
pub enum BookmarkError {
    #[error(transparent)]
    AccessDenied(#[from] AccessDenied),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
