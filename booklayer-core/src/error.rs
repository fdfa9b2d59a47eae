//! Error types and result types for book repository operations.
//!
//! Use [`BookStoreResult<T>`] as the return type for fallible repository operations.

use std::time::Duration;

use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a book store.
#[derive(Error, Debug)]
pub enum BookStoreError {
    /// Error during store initialization or connection setup.
    #[error("Initialization error: {0}")]
    Initialization(String),
    /// No book with the given identifier exists in the store.
    #[error("Book not found: {0}")]
    BookNotFound(String),
    /// The identifier could not be parsed into the store's identifier type.
    #[error("Invalid book id: {0}")]
    InvalidId(String),
    /// A stored record does not have the expected shape.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// An error occurred in the underlying storage backend.
    #[error("Backend error: {0}")]
    Backend(String),
    /// The operation did not complete within its deadline.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl BookStoreError {
    /// Returns `true` if this error reports a missing record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BookStoreError::BookNotFound(_))
    }
}

/// A specialized `Result` type for book store operations.
pub type BookStoreResult<T> = Result<T, BookStoreError>;
