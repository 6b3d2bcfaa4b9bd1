//! Lookup-or-create for books keyed by (user, title, author).

use anyhow::Result;
use reading_sync_core::{BOOKS_TABLE, Book, Filter, NewBook, TableClient};

use crate::error::CreationError;

/// Outcome of a book resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub book: Book,
    /// True when the book was inserted by this call rather than found.
    pub created: bool,
}

/// Find an existing book for (user, title, author) or create one.
///
/// Exact-match lookup, first row wins. When `author` is absent the lookup
/// matches any author. There is no locking, so concurrent imports of the
/// same title may race and create duplicate books.
///
/// # Errors
/// Returns an error if a backend call fails, a row cannot be decoded, or
/// the insert returns no rows ([`CreationError`]).
pub async fn resolve_book(
    client: &dyn TableClient,
    user_id: &str,
    title: &str,
    author: Option<&str>,
) -> Result<Resolution> {
    let mut filters = vec![
        Filter::Eq("user_id", user_id.to_owned()),
        Filter::Eq("title", title.to_owned()),
    ];
    if let Some(author) = author {
        filters.push(Filter::Eq("author", author.to_owned()));
    }

    let rows = client.select(BOOKS_TABLE, &filters).await?;
    if let Some(row) = rows.into_iter().next() {
        let book: Book = serde_json::from_value(row)?;
        return Ok(Resolution { book, created: false });
    }

    let payload = serde_json::to_value(NewBook::new(user_id, title, author.map(str::to_owned)))?;
    let rows = client.insert(BOOKS_TABLE, payload).await?;
    let Some(row) = rows.into_iter().next() else {
        return Err(CreationError { table: BOOKS_TABLE }.into());
    };
    let book: Book = serde_json::from_value(row)?;
    tracing::debug!(title, book_id = %book.id, "created book");
    Ok(Resolution { book, created: true })
}
