//! Shared harness for the HTTP integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Mutex};

use async_trait::async_trait;
use axum::Router;
use booklayer::{
    book::Book,
    error::{BookStoreError, BookStoreResult},
    id::DocumentId,
    repository::BookRepository,
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

/// A router served on an ephemeral local port.
pub struct TestServer {
    addr: SocketAddr,
    pub client: reqwest::Client,
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestServer {
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(booklayer_server::server::serve_until(
            listener,
            router,
            async move {
                let _ = stopped.await;
            },
        ));

        Self {
            addr,
            client: reqwest::Client::new(),
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Stops the server and waits for it to drain.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.unwrap().unwrap();
        }
    }
}

// =============================================================================
// FakeDocumentStore — a DocumentId-keyed repository that needs no database
// =============================================================================

/// Keeps books in insertion order. When `failing` is set every operation
/// reports a backend error.
#[derive(Debug, Default)]
pub struct FakeDocumentStore {
    books: Mutex<Vec<Book<DocumentId>>>,
    failing: bool,
}

impl FakeDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    fn check(&self) -> BookStoreResult<()> {
        match self.failing {
            true => Err(BookStoreError::Backend("connection refused".to_string())),
            false => Ok(()),
        }
    }
}

#[async_trait]
impl BookRepository for FakeDocumentStore {
    type Id = DocumentId;

    async fn list_all(&self) -> BookStoreResult<Vec<Book<DocumentId>>> {
        self.check()?;
        Ok(self.books.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &DocumentId) -> BookStoreResult<Book<DocumentId>> {
        self.check()?;
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|book| book.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| BookStoreError::BookNotFound(id.to_string()))
    }

    async fn create(&self, book: Book<DocumentId>) -> BookStoreResult<Book<DocumentId>> {
        self.check()?;
        let created = book.with_id(DocumentId::new());
        self.books.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &DocumentId, book: Book<DocumentId>) -> BookStoreResult<Book<DocumentId>> {
        self.check()?;
        let mut books = self.books.lock().unwrap();
        let stored = books
            .iter_mut()
            .find(|stored| stored.id.as_ref() == Some(id))
            .ok_or_else(|| BookStoreError::BookNotFound(id.to_string()))?;

        stored.overwrite_fields(book);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &DocumentId) -> BookStoreResult<()> {
        self.check()?;
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|book| book.id.as_ref() != Some(id));

        match books.len() < before {
            true => Ok(()),
            false => Err(BookStoreError::BookNotFound(id.to_string())),
        }
    }
}
