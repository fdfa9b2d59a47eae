use std::{future::IntoFuture, time::Duration};

use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Client, Collection as MongoCollection, options::ClientOptions};
use booklayer_core::{
    book::Book,
    error::{BookStoreError, BookStoreResult},
    id::DocumentId,
    repository::{BookRepository, BookRepositoryBuilder},
};

use crate::document::BookDocument;

pub const DEFAULT_DATABASE: &str = "api_book";
pub const DEFAULT_COLLECTION: &str = "books";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_DISCONNECT_TIMEOUT: Duration = Duration::from_secs(5);


/// Runs a driver call under a deadline.
async fn bounded<T, F>(limit: Duration, operation: F) -> BookStoreResult<T>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    tokio::time::timeout(limit, operation)
        .await
        .map_err(|_| BookStoreError::Timeout(limit))?
        .map_err(|e| BookStoreError::Backend(e.to_string()))
}

fn by_id(id: &DocumentId) -> Document {
    doc! { "_id": id.object_id() }
}


/// Book store backed by a single MongoDB collection.
///
/// The client pools connections internally, so one store can be shared by
/// every request handler. Clones share the same client.
#[derive(Debug, Clone)]
pub struct MongoDbBookStore {
    client: Client,
    books: MongoCollection<BookDocument>,
    operation_timeout: Duration,
    disconnect_timeout: Duration,
}

impl MongoDbBookStore {
    pub fn builder(uri: &str) -> MongoDbBookStoreBuilder {
        MongoDbBookStoreBuilder::new(uri)
    }
}

#[async_trait]
impl BookRepository for MongoDbBookStore {
    type Id = DocumentId;

    async fn list_all(&self) -> BookStoreResult<Vec<Book<DocumentId>>> {
        let documents = bounded(self.operation_timeout, async {
            self.books
                .find(doc! {})
                .await?
                .try_collect::<Vec<BookDocument>>()
                .await
        })
        .await?;

        tracing::debug!(count = documents.len(), "listed books");

        Ok(documents.into_iter().map(Book::from).collect())
    }

    async fn get_by_id(&self, id: &DocumentId) -> BookStoreResult<Book<DocumentId>> {
        bounded(self.operation_timeout, self.books.find_one(by_id(id)))
            .await?
            .map(Book::from)
            .ok_or_else(|| BookStoreError::BookNotFound(id.to_string()))
    }

    async fn create(&self, book: Book<DocumentId>) -> BookStoreResult<Book<DocumentId>> {
        let mut document = BookDocument::for_insert(book);

        let inserted = bounded(self.operation_timeout, self.books.insert_one(&document)).await?;

        document.id = Some(
            inserted
                .inserted_id
                .as_object_id()
                .ok_or_else(|| BookStoreError::InvalidDocument(
                    format!("inserted id {} is not an ObjectId", inserted.inserted_id)
                ))?,
        );

        tracing::debug!(id = ?document.id, "created book");
        Ok(document.into())
    }

    async fn update(&self, id: &DocumentId, book: Book<DocumentId>) -> BookStoreResult<Book<DocumentId>> {
        let result = bounded(
            self.operation_timeout,
            self.books.update_one(by_id(id), BookDocument::set_fields(&book)),
        )
        .await?;

        if result.matched_count == 0 {
            return Err(BookStoreError::BookNotFound(id.to_string()));
        }

        tracing::debug!(%id, modified = result.modified_count, "updated book");

        // Respond with the stored state, not the input.
        self.get_by_id(id).await
    }

    async fn delete(&self, id: &DocumentId) -> BookStoreResult<()> {
        let result = bounded(self.operation_timeout, self.books.delete_one(by_id(id))).await?;

        if result.deleted_count == 0 {
            return Err(BookStoreError::BookNotFound(id.to_string()));
        }

        tracing::debug!(%id, "deleted book");
        Ok(())
    }

    async fn shutdown(self) -> BookStoreResult<()> {
        let limit = self.disconnect_timeout;

        tokio::time::timeout(limit, self.client.shutdown())
            .await
            .map_err(|_| BookStoreError::Timeout(limit))?;

        tracing::info!("disconnected from MongoDB");
        Ok(())
    }
}

/// Builder for [`MongoDbBookStore`].
///
/// Building connects to the server and verifies it with a `ping` before the
/// store is handed out.
#[derive(Debug, Clone)]
pub struct MongoDbBookStoreBuilder {
    uri: String,
    database: String,
    collection: String,
    connect_timeout: Duration,
    operation_timeout: Duration,
    disconnect_timeout: Duration,
}

impl MongoDbBookStoreBuilder {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            disconnect_timeout: DEFAULT_DISCONNECT_TIMEOUT,
        }
    }

    pub fn database(mut self, database: &str) -> Self {
        self.database = database.to_string();
        self
    }

    pub fn collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }

    /// Deadline for parsing the URI, connecting and the liveness `ping`.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Deadline applied to each CRUD operation.
    pub fn operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    pub fn disconnect_timeout(mut self, timeout: Duration) -> Self {
        self.disconnect_timeout = timeout;
        self
    }
}

#[async_trait]
impl BookRepositoryBuilder for MongoDbBookStoreBuilder {
    type Repository = MongoDbBookStore;

    async fn build(self) -> BookStoreResult<Self::Repository> {
        let client = bounded(self.connect_timeout, async {
            let client = Client::with_options(ClientOptions::parse(&self.uri).await?)?;

            client
                .database(&self.database)
                .run_command(doc! { "ping": 1 })
                .await?;

            Ok::<_, mongodb::error::Error>(client)
        })
        .await
        .map_err(|e| BookStoreError::Initialization(e.to_string()))?;

        tracing::info!(
            database = %self.database,
            collection = %self.collection,
            "connected to MongoDB"
        );

        Ok(MongoDbBookStore {
            books: client
                .database(&self.database)
                .collection(&self.collection),
            client,
            operation_timeout: self.operation_timeout,
            disconnect_timeout: self.disconnect_timeout,
        })
    }
}
