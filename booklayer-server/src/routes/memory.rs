//! `/book` routes backed by the in-memory store.
//!
//! Every failure, a missing record included, answers `400 Bad Request`.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;

use booklayer::{book::Book, id::SequentialId, memory::InMemoryBookStore};

use crate::error::ApiError;

pub const INVALID_ID: &str = "Id harus berupa angka";
pub const BOOK_MISSING: &str = "Data tidak ada";
pub const INVALID_BOOK: &str = "Format buku tidak valid";
pub const TITLE_REQUIRED: &str = "Judul buku harus diisi";
pub const INVALID_UPDATE: &str = "Format update tidak valid";
pub const UPDATE_FAILED: &str = "Gagal update buku";
pub const DELETE_FAILED: &str = "Gagal menghapus buku";
pub const CLEARED: &str = "Semua data berhasil dihapus";

type MemoryBook = Book<SequentialId>;

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

pub fn router(store: InMemoryBookStore) -> Router {
    Router::new()
        .route("/book", get(list_books).post(create_book).delete(clear_books))
        .route("/book/{id}", get(get_book).put(update_book).delete(delete_book))
        .with_state(store)
}

fn parse_id(raw: &str) -> Result<SequentialId, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request(INVALID_ID))
}

/// Decodes a JSON book regardless of the request's `Content-Type`.
fn decode(body: &[u8], message: &'static str) -> Result<MemoryBook, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        ApiError::bad_request(message)
    })
}

async fn list_books(State(store): State<InMemoryBookStore>) -> Json<Vec<MemoryBook>> {
    Json(store.list_all().await)
}

async fn get_book(
    State(store): State<InMemoryBookStore>,
    Path(id): Path<String>,
) -> Result<Json<MemoryBook>, ApiError> {
    store
        .get_by_id(parse_id(&id)?)
        .await
        .map(Json)
        .ok_or(ApiError::bad_request(BOOK_MISSING))
}

async fn create_book(
    State(store): State<InMemoryBookStore>,
    body: Bytes,
) -> Result<Json<MemoryBook>, ApiError> {
    let book = decode(&body, INVALID_BOOK)?;

    if book.title.is_empty() {
        return Err(ApiError::bad_request(TITLE_REQUIRED));
    }

    Ok(Json(store.create(book).await))
}

async fn update_book(
    State(store): State<InMemoryBookStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MemoryBook>, ApiError> {
    // The body is checked before the id.
    let book = decode(&body, INVALID_UPDATE)?;
    let id = parse_id(&id)?;

    store
        .update(id, book)
        .await
        .map(Json)
        .ok_or(ApiError::bad_request(UPDATE_FAILED))
}

async fn delete_book(
    State(store): State<InMemoryBookStore>,
    Path(id): Path<String>,
) -> Result<Json<bool>, ApiError> {
    match store.delete(parse_id(&id)?).await {
        true => Ok(Json(true)),
        false => Err(ApiError::bad_request(DELETE_FAILED)),
    }
}

async fn clear_books(State(store): State<InMemoryBookStore>) -> Json<MessageBody> {
    store.clear_all().await;

    Json(MessageBody { message: CLEARED })
}
