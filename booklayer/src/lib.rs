//! Main booklayer crate providing a unified interface over the book stores.
//!
//! This crate re-exports the core types and gives access to the storage
//! backends.
//!
//! # Quick Start
//!
//! ```ignore
//! use booklayer::{prelude::*, memory::InMemoryBookStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = InMemoryBookStore::builder().build().await.unwrap();
//!
//!     let created = BookRepository::create(&store, Book::new("Dune", "Frank Herbert", "", 1965))
//!         .await
//!         .unwrap();
//!
//!     let fetched = BookRepository::get_by_id(&store, created.id.as_ref().unwrap())
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(created, fetched);
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Process-local storage with sequential ids and bulk clearing
//! - [`mongodb`] - Persistent MongoDB backend (requires `mongodb` feature)

pub mod prelude;

pub use booklayer_core::{book, id, repository, error};

/// In-memory storage backend.
pub mod memory {
    pub use booklayer_memory::{InMemoryBookStore, InMemoryBookStoreBuilder};
}

/// MongoDB storage backend.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use booklayer_mongodb::{MongoDbBookStore, MongoDbBookStoreBuilder, document::BookDocument};
}
