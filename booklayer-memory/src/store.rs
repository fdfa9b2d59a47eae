//! In-memory storage implementation for book records.
//!
//! Records are kept in a `HashMap` keyed by [`SequentialId`], together with the
//! next identifier to hand out. Both live behind one async mutex so that
//! identifier assignment and insertion happen atomically.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::mutex::Mutex;

use booklayer_core::{
    book::Book,
    error::{BookStoreError, BookStoreResult},
    id::SequentialId,
    repository::{BookRepository, BookRepositoryBuilder},
};

type StoredBook = Book<SequentialId>;

#[derive(Debug)]
struct BookTable {
    books: HashMap<SequentialId, StoredBook>,
    next_id: SequentialId,
}

impl BookTable {
    fn empty() -> Self {
        Self {
            books: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Thread-safe in-memory book store.
///
/// # Thread Safety
///
/// `InMemoryBookStore` is cloneable and uses an `Arc`-wrapped internal state,
/// so clones share the same records. Every operation, reads included, holds one
/// exclusive lock for its full duration. No operation calls another while the
/// lock is held.
///
/// # Example
///
/// ```ignore
/// use booklayer_memory::InMemoryBookStore;
/// use booklayer_core::book::Book;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryBookStore::new();
///
///     let created = store.create(Book::new("Dune", "Frank Herbert", "", 1965)).await;
///     assert_eq!(created.id, Some(1));
///
///     assert_eq!(store.get_by_id(1).await, Some(created));
///     assert!(store.delete(1).await);
///     assert_eq!(store.get_by_id(1).await, None);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct InMemoryBookStore {
    table: Arc<Mutex<BookTable>>,
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookStore {
    /// Creates an empty store whose first assigned identifier is 1.
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(BookTable::empty())),
        }
    }

    /// Creates a builder for constructing an `InMemoryBookStore`.
    ///
    /// The builder seeds the store with a sample record unless told otherwise.
    pub fn builder() -> InMemoryBookStoreBuilder {
        InMemoryBookStoreBuilder::default()
    }

    /// Seeds the sample record under id 1 and sets the next identifier to 2.
    ///
    /// Called once at startup.
    pub async fn initialize(&self) {
        let mut table = self.table.lock().await;

        table.books.insert(
            1,
            Book::new("1984", "George Orwell", "10239", 1994).with_id(1),
        );
        table.next_id = 2;

        tracing::info!("seeded in-memory book store");
    }

    /// Returns every stored book in unspecified order.
    pub async fn list_all(&self) -> Vec<StoredBook> {
        self.table
            .lock()
            .await
            .books
            .values()
            .cloned()
            .collect()
    }

    /// Returns the book stored under `id`, or `None` if there is none.
    pub async fn get_by_id(&self, id: SequentialId) -> Option<StoredBook> {
        self.table
            .lock()
            .await
            .books
            .get(&id)
            .cloned()
    }

    /// Stores `book` under the next identifier and returns the stored record.
    ///
    /// Any identifier already present on `book` is ignored.
    pub async fn create(&self, book: StoredBook) -> StoredBook {
        let mut table = self.table.lock().await;

        let id = table.next_id;
        table.next_id += 1;

        let stored = book.with_id(id);
        table.books.insert(id, stored.clone());

        tracing::debug!(id, "created book");
        stored
    }

    /// Overwrites every field except the identifier of the book stored under `id`.
    ///
    /// Returns `None`, leaving the store untouched, if `id` is absent.
    pub async fn update(&self, id: SequentialId, book: StoredBook) -> Option<StoredBook> {
        let mut table = self.table.lock().await;
        let stored = table.books.get_mut(&id)?;

        stored.overwrite_fields(book);

        tracing::debug!(id, "updated book");
        Some(stored.clone())
    }

    /// Removes the book stored under `id`. Returns `false` if it was absent.
    pub async fn delete(&self, id: SequentialId) -> bool {
        let removed = self.table
            .lock()
            .await
            .books
            .remove(&id)
            .is_some();

        if removed {
            tracing::debug!(id, "deleted book");
        }

        removed
    }

    /// Removes every book and restarts identifier assignment at 1.
    pub async fn clear_all(&self) {
        *self.table.lock().await = BookTable::empty();

        tracing::info!("cleared in-memory book store");
    }
}


#[async_trait]
impl BookRepository for InMemoryBookStore {
    type Id = SequentialId;

    async fn list_all(&self) -> BookStoreResult<Vec<StoredBook>> {
        Ok(InMemoryBookStore::list_all(self).await)
    }

    async fn get_by_id(&self, id: &SequentialId) -> BookStoreResult<StoredBook> {
        InMemoryBookStore::get_by_id(self, *id)
            .await
            .ok_or_else(|| BookStoreError::BookNotFound(id.to_string()))
    }

    async fn create(&self, book: StoredBook) -> BookStoreResult<StoredBook> {
        Ok(InMemoryBookStore::create(self, book).await)
    }

    async fn update(&self, id: &SequentialId, book: StoredBook) -> BookStoreResult<StoredBook> {
        InMemoryBookStore::update(self, *id, book)
            .await
            .ok_or_else(|| BookStoreError::BookNotFound(id.to_string()))
    }

    async fn delete(&self, id: &SequentialId) -> BookStoreResult<()> {
        match InMemoryBookStore::delete(self, *id).await {
            true => Ok(()),
            false => Err(BookStoreError::BookNotFound(id.to_string())),
        }
    }
}


/// Builder for constructing [`InMemoryBookStore`] instances.
///
/// # Example
///
/// ```ignore
/// use booklayer_memory::InMemoryBookStore;
/// use booklayer_core::repository::BookRepositoryBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let empty = InMemoryBookStore::builder().seed(false).build().await.unwrap();
///     assert!(empty.list_all().await.is_empty());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryBookStoreBuilder {
    seed: bool,
}

impl Default for InMemoryBookStoreBuilder {
    fn default() -> Self {
        Self { seed: true }
    }
}

impl InMemoryBookStoreBuilder {
    /// Whether to run [`InMemoryBookStore::initialize`] on build.
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }
}

#[async_trait]
impl BookRepositoryBuilder for InMemoryBookStoreBuilder {
    type Repository = InMemoryBookStore;

    /// Builds a new store. This always succeeds.
    async fn build(self) -> BookStoreResult<Self::Repository> {
        let store = InMemoryBookStore::new();

        if self.seed {
            store.initialize().await;
        }

        Ok(store)
    }
}
