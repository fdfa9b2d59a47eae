//! Persisted shape of a book record.

use bson::{Document, doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use booklayer_core::{book::Book, id::DocumentId};

/// A book as stored in the collection.
///
/// `_id` is left out on insert so that the database generates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub year: i64,
}

impl BookDocument {
    /// Builds a document ready for insertion, dropping any identifier on `book`.
    pub fn for_insert(book: Book<DocumentId>) -> Self {
        Self {
            id: None,
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            year: book.year,
        }
    }

    /// `$set` update replacing every field except `_id`.
    pub fn set_fields(book: &Book<DocumentId>) -> Document {
        doc! {
            "$set": {
                "title": book.title.clone(),
                "author": book.author.clone(),
                "isbn": book.isbn.clone(),
                "year": book.year,
            }
        }
    }
}

impl From<BookDocument> for Book<DocumentId> {
    fn from(document: BookDocument) -> Self {
        Book {
            id: document.id.map(DocumentId::from),
            title: document.title,
            author: document.author,
            isbn: document.isbn,
            year: document.year,
        }
    }
}
