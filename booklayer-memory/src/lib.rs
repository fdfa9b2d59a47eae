//! In-memory book storage backend for booklayer.
//!
//! This crate provides a thread-safe, process-local implementation of the
//! `BookRepository` trait. Records live in a map keyed by sequential integer
//! identifiers, and every operation runs under a single async-aware mutex.
//! It suits development, testing, and deployments that do not need persistence.
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
//!     let dune = store.create(Book::new("Dune", "Frank Herbert", "", 1965)).await;
//!     assert_eq!(dune.id, Some(2));
//!
//!     store.clear_all().await;
//!     assert!(store.list_all().await.is_empty());
//! }
//! ```

pub mod store;

pub use store::{InMemoryBookStore, InMemoryBookStoreBuilder};
