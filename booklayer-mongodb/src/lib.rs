//! MongoDB backend implementation for booklayer.
//!
//! This crate provides a MongoDB-based implementation of the `BookRepository`
//! trait. Concurrency control is left to the database, and every operation is
//! bounded by a deadline so that a stalled server surfaces as an error instead
//! of a hung request.
//!
//! To use this backend through the facade crate, enable the `mongodb` feature:
//!
//! ```toml
//! [dependencies]
//! booklayer = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Connection
//!
//! Building the store parses the connection string, creates a client and sends
//! a `ping` to the target database. Building fails if any of these steps fail
//! or take longer than the connect timeout.
//!
//! # Example
//!
//! ```ignore
//! use booklayer::{prelude::*, mongodb::MongoDbBookStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbBookStore::builder("mongodb://localhost:27017")
//!         .database("api_book")
//!         .collection("books")
//!         .build()
//!         .await?;
//!
//!     let created = store.create(Book::new("Dune", "Frank Herbert", "", 1965)).await?;
//!     println!("stored as {}", created.id.unwrap());
//!
//!     store.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod store;

pub use store::{MongoDbBookStore, MongoDbBookStoreBuilder};
