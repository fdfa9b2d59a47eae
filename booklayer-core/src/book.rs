//! The book record and its JSON shape.

use serde::{Deserialize, Serialize};

/// A single book record.
///
/// `Id` is the identifier type of the store that owns the record. The identifier
/// is always assigned by the store; a value supplied by a caller on create is
/// discarded. Missing fields decode to their empty value so that validation
/// can happen at the request boundary instead of during decoding.
///
/// # JSON shape
///
/// ```json
/// { "id": 1, "title": "1984", "author": "George Orwell", "isbn": "10239", "year": 1994 }
/// ```
///
/// `id` is omitted from the output while unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book<Id> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub year: i64,
}

impl<Id> Book<Id> {
    /// Creates a book that has not been assigned an identifier yet.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
        }
    }

    /// Returns this book with `id` set.
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns this book with any identifier removed.
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }

    /// Replaces every field except the identifier with the values from `other`.
    pub fn overwrite_fields<Other>(&mut self, other: Book<Other>) {
        self.title = other.title;
        self.author = other.author;
        self.isbn = other.isbn;
        self.year = other.year;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_id_is_omitted_from_json() {
        let book: Book<i64> = Book::new("Dune", "Herbert", "", 0);

        assert_eq!(
            serde_json::to_value(&book).unwrap(),
            json!({ "title": "Dune", "author": "Herbert", "isbn": "", "year": 0 })
        );
    }

    #[test]
    fn missing_fields_decode_to_empty_values() {
        let book: Book<i64> = serde_json::from_value(json!({ "title": "Dune" })).unwrap();

        assert_eq!(book.id, None);
        assert_eq!(book.title, "Dune");
        assert!(book.author.is_empty());
        assert!(book.isbn.is_empty());
        assert_eq!(book.year, 0);
    }

    #[test]
    fn mistyped_fields_fail_to_decode() {
        assert!(serde_json::from_value::<Book<i64>>(json!({ "title": 7 })).is_err());
        assert!(serde_json::from_value::<Book<i64>>(json!({ "year": "1965" })).is_err());
        assert!(serde_json::from_value::<Book<i64>>(json!({ "id": "one" })).is_err());
    }

    #[test]
    fn year_is_not_limited_to_32_bits() {
        let year = i64::from(i32::MAX) + 1;
        let book: Book<i64> = serde_json::from_value(json!({ "title": "Dune", "year": year })).unwrap();

        assert_eq!(book.year, year);
        assert_eq!(serde_json::to_value(&book).unwrap()["year"], json!(year));
    }

    #[test]
    fn overwrite_keeps_identifier() {
        let mut stored = Book::new("Old", "A", "1", 1).with_id(3_i64);
        stored.overwrite_fields(Book::new("New", "B", "2", 2).with_id(99_i64));

        assert_eq!(stored, Book::new("New", "B", "2", 2).with_id(3));
    }
}
