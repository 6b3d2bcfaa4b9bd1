//! Table backend abstraction trait
//!
//! Provides a common interface over the hosted PostgREST table API and the
//! in-memory fake. Enables mocking, testing, and backend-agnostic import code.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Books table.
pub const BOOKS_TABLE: &str = "books";
/// Reading events table.
pub const READING_EVENTS_TABLE: &str = "reading_events";
/// Backend-side view of events considered authoritative for stats.
/// Which rows it keeps is the backend's business; clients only read it.
pub const VALID_READING_EVENTS_VIEW: &str = "valid_reading_events";

/// A single column filter applied to a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Column equals the given value.
    Eq(&'static str, String),
    /// Column is SQL NULL.
    IsNull(&'static str),
}

/// Minimal table-level interface to the remote backend.
///
/// Implemented by the reqwest-based `SupabaseClient` and by the in-memory
/// `MemoryTables` used in tests. The trait is async because the real
/// backend sits behind HTTP.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Rows of `table` matching every filter.
    async fn select(&self, table: &str, filters: &[Filter]) -> Result<Vec<Value>>;

    /// Insert one row into `table`, returning the rows the backend reports
    /// as inserted. May be empty.
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>>;
}
