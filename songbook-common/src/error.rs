//! Common error types for songbook

use thiserror::Error;

/// Common result type for songbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the songbook crates
#[derive(Error, Debug)]
pub enum Error {
    /// Query failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Partial update carried no fields
    #[error("no fields to update")]
    NoFieldsToUpdate,
}

impl Error {
    /// True when the underlying query matched no row
    pub fn is_row_not_found(&self) -> bool {
        matches!(self, Error::Database(sqlx::Error::RowNotFound))
    }
}
