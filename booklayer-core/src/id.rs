//! Identifier types assigned to books by the stores.
//!
//! The in-memory store hands out [`SequentialId`]s starting at 1. The document
//! store uses database-generated ObjectIds, wrapped in [`DocumentId`] so that they
//! render as plain 24-character hex strings in JSON.

use std::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned};

use crate::error::BookStoreError;

/// Bound satisfied by every identifier type a store can assign.
///
/// Identifiers travel through URL path segments, so they must be parseable
/// with [`FromStr`] and printable with [`Display`].
pub trait BookId:
    Clone + Debug + Display + PartialEq + FromStr + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl<T> BookId for T where
    T: Clone + Debug + Display + PartialEq + FromStr + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

/// Sequential identifier used by the in-memory store.
pub type SequentialId = i64;

/// Database-generated identifier used by the document store.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Returns the underlying ObjectId.
    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Returns the lowercase hex form of this identifier.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl From<DocumentId> for ObjectId {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = BookStoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|e| BookStoreError::InvalidId(format!("{s}: {e}")))
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;

        hex.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_renders_as_hex_string() {
        let id: DocumentId = "65a1f0c2e4b0a1b2c3d4e5f6".parse().unwrap();

        assert_eq!(id.to_string(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"65a1f0c2e4b0a1b2c3d4e5f6\""
        );
    }

    #[test]
    fn document_id_rejects_malformed_hex() {
        for input in ["", "123", "zzzzzzzzzzzzzzzzzzzzzzzz", "65a1f0c2e4b0a1b2c3d4e5f6aa"] {
            let parsed = input.parse::<DocumentId>();
            assert!(
                matches!(parsed, Err(BookStoreError::InvalidId(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn document_id_deserialize_rejects_non_hex() {
        assert!(serde_json::from_str::<DocumentId>("\"not-an-id\"").is_err());
        assert!(serde_json::from_str::<DocumentId>("42").is_err());
    }
}
