//! Convenient re-exports of commonly used types from booklayer.
//!
//! ```ignore
//! use booklayer::prelude::*;
//! ```

pub use booklayer_core::{
    book::Book,
    id::{BookId, DocumentId, SequentialId},
    repository::{BookRepository, BookRepositoryBuilder},
    error::{BookStoreError, BookStoreResult},
};
