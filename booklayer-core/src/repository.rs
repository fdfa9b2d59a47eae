//! Storage backend abstraction for book records.
//!
//! This module defines the traits that abstract over the different stores,
//! allowing the request-handling layer to work against either backend.
//!
//! # Overview
//!
//! The [`BookRepository`] trait provides a unified async interface for the CRUD
//! operations. Implementations are required to be thread-safe (`Send + Sync`)
//! and support concurrent access. [`BookRepositoryBuilder`] is the factory that
//! produces a ready-to-use repository.
//!
//! # Examples
//!
//! ```ignore
//! use booklayer_core::{book::Book, repository::{BookRepository, BookRepositoryBuilder}};
//!
//! let repo = MyRepositoryBuilder::default().build().await?;
//! let created = repo.create(Book::new("Dune", "Frank Herbert", "", 1965)).await?;
//! let fetched = repo.get_by_id(created.id.as_ref().unwrap()).await?;
//! assert_eq!(created, fetched);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{book::Book, error::BookStoreResult, id::BookId};

/// Abstract interface for book storage backends.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from
/// multiple async tasks. The concurrency model (a single mutex, or delegation to
/// a database) is implementation-specific and documented by the implementer.
///
/// # Error Handling
///
/// Operations targeting a missing record fail with
/// [`BookStoreError::BookNotFound`](crate::error::BookStoreError::BookNotFound).
/// Any other variant reports an infrastructure failure.
#[async_trait]
pub trait BookRepository: Send + Sync + Debug {
    /// The identifier type this repository assigns.
    type Id: BookId;

    /// Returns every stored book. Ordering is not guaranteed.
    async fn list_all(&self) -> BookStoreResult<Vec<Book<Self::Id>>>;

    /// Returns the book stored under `id`.
    async fn get_by_id(&self, id: &Self::Id) -> BookStoreResult<Book<Self::Id>>;

    /// Stores a new book and returns it with its assigned identifier.
    ///
    /// Any identifier already present on `book` is ignored.
    async fn create(&self, book: Book<Self::Id>) -> BookStoreResult<Book<Self::Id>>;

    /// Replaces every field except the identifier of the book stored under `id`.
    ///
    /// Returns the stored state after the update. A missing `id` leaves the
    /// store unchanged.
    async fn update(
        &self,
        id: &Self::Id,
        book: Book<Self::Id>,
    ) -> BookStoreResult<Book<Self::Id>>;

    /// Removes the book stored under `id`.
    async fn delete(&self, id: &Self::Id) -> BookStoreResult<()>;

    /// Cleanly shuts down the repository, releasing all resources.
    ///
    /// The default implementation is a no-op; repositories holding external
    /// connections should override this.
    async fn shutdown(self) -> BookStoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Factory trait for creating repository instances.
#[async_trait]
pub trait BookRepositoryBuilder {
    type Repository: BookRepository;

    async fn build(self) -> BookStoreResult<Self::Repository>;
}
