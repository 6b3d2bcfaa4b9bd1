use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A per-user catalog entry for a title/author pair.
///
/// (user_id, title, author) is a soft natural key: lookups treat it as
/// unique but the backend enforces no constraint, so racing imports may
/// still create duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    /// Set when this book has been superseded by a canonical duplicate.
    pub merged_into: Option<Uuid>,
}

/// Insert payload for a book. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewBook {
    pub user_id: String,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub merged_into: Option<Uuid>,
}

impl NewBook {
    /// New book with no isbn, never pre-merged.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        author: Option<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            title: title.into(),
            author,
            isbn: None,
            merged_into: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book_serializes_nulls_explicitly() {
        let book = NewBook::new("user-1", "Dune", None);
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["title"], "Dune");
        assert!(value["author"].is_null());
        assert!(value["isbn"].is_null());
        assert!(value["merged_into"].is_null());
        assert!(value.get("id").is_none());
    }
}
