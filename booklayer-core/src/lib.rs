//! Core types shared by every booklayer backend.
//!
//! This crate provides:
//!
//! - **Book model** ([`book`]) - The single record type, generic over its identifier
//! - **Identifiers** ([`id`]) - Sequential and database-generated identifier types
//! - **Repository abstraction** ([`repository`]) - Traits implemented by each storage backend
//! - **Error handling** ([`error`]) - Error and result types for repository operations
//!
//! # Example
//!
//! ```ignore
//! use booklayer_core::{book::Book, id::SequentialId, repository::BookRepository};
//!
//! async fn add_dune<R: BookRepository<Id = SequentialId>>(repo: &R) {
//!     let book = repo
//!         .create(Book::new("Dune", "Frank Herbert", "9780441013593", 1965))
//!         .await
//!         .unwrap();
//!
//!     assert!(book.id.is_some());
//! }
//! ```

pub mod book;
pub mod error;
pub mod id;
pub mod repository;
