//! `/books` routes backed by a repository keyed by [`DocumentId`].
//!
//! Missing records answer `404 Not Found`; store failures answer
//! `500 Internal Server Error` and are logged. Title and author are both
//! required on create and update.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use booklayer::{book::Book, error::BookStoreError, id::DocumentId, repository::BookRepository};

use crate::error::ApiError;

pub const INVALID_ID: &str = "ID buku tidak valid";
pub const BOOK_NOT_FOUND: &str = "Buku tidak ditemukan";
pub const INVALID_BOOK: &str = "Format buku tidak valid";
pub const FIELDS_REQUIRED: &str = "Judul dan penulis buku harus diisi";
pub const FETCH_FAILED: &str = "Gagal mengambil data buku";
pub const CREATE_FAILED: &str = "Gagal menambahkan buku";
pub const UPDATE_FAILED: &str = "Gagal memperbarui buku";
pub const DELETE_FAILED: &str = "Gagal menghapus buku";

type StoredBook = Book<DocumentId>;

pub fn router<R>(store: Arc<R>) -> Router
where
    R: BookRepository<Id = DocumentId> + 'static,
{
    Router::new()
        .route("/books", get(list_books::<R>).post(create_book::<R>))
        .route(
            "/books/{id}",
            get(get_book::<R>).put(update_book::<R>).delete(delete_book::<R>),
        )
        .with_state(store)
}

fn parse_id(raw: &str) -> Result<DocumentId, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request(INVALID_ID))
}

fn validate(body: &[u8]) -> Result<StoredBook, ApiError> {
    let book: StoredBook = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        ApiError::bad_request(INVALID_BOOK)
    })?;

    if book.title.is_empty() || book.author.is_empty() {
        return Err(ApiError::bad_request(FIELDS_REQUIRED));
    }

    Ok(book)
}

fn store_failure(err: BookStoreError, failure: &'static str) -> ApiError {
    if err.is_not_found() {
        return ApiError::not_found(BOOK_NOT_FOUND);
    }

    tracing::error!(error = %err, "{failure}");
    ApiError::internal(failure)
}

async fn list_books<R>(State(store): State<Arc<R>>) -> Result<Json<Vec<StoredBook>>, ApiError>
where
    R: BookRepository<Id = DocumentId>,
{
    store
        .list_all()
        .await
        .map(Json)
        .map_err(|e| store_failure(e, FETCH_FAILED))
}

async fn get_book<R>(
    State(store): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<StoredBook>, ApiError>
where
    R: BookRepository<Id = DocumentId>,
{
    store
        .get_by_id(&parse_id(&id)?)
        .await
        .map(Json)
        .map_err(|e| store_failure(e, FETCH_FAILED))
}

async fn create_book<R>(
    State(store): State<Arc<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<StoredBook>), ApiError>
where
    R: BookRepository<Id = DocumentId>,
{
    let book = validate(&body)?;

    store
        .create(book.without_id())
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|e| store_failure(e, CREATE_FAILED))
}

async fn update_book<R>(
    State(store): State<Arc<R>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<StoredBook>, ApiError>
where
    R: BookRepository<Id = DocumentId>,
{
    let id = parse_id(&id)?;
    let book = validate(&body)?;

    store
        .update(&id, book)
        .await
        .map(Json)
        .map_err(|e| store_failure(e, UPDATE_FAILED))
}

async fn delete_book<R>(
    State(store): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ApiError>
where
    R: BookRepository<Id = DocumentId>,
{
    store
        .delete(&parse_id(&id)?)
        .await
        .map(|()| Json(true))
        .map_err(|e| store_failure(e, DELETE_FAILED))
}
