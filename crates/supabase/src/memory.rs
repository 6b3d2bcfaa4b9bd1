//! In-memory table backend for tests and offline experiments.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use anyhow::{Result, bail};
use async_trait::async_trait;
use reading_sync_core::{Filter, TableClient};
use serde_json::{Value, json};
use uuid::Uuid;

/// `TableClient` backed by process-local maps, one list of rows per table
/// name. Views are plain tables here; seed them directly when a test needs
/// view rows.
#[derive(Debug, Default)]
pub struct MemoryTables {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    reject_inserts: AtomicBool,
}

impl MemoryTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent inserts return no rows, like a backend that refuses
    /// the write without erroring.
    pub fn set_reject_inserts(&self, reject: bool) {
        self.reject_inserts.store(reject, Ordering::Relaxed);
    }

    /// Append rows to a table (or view).
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables.entry(table.to_owned()).or_default().extend(rows);
    }

    /// Number of rows currently in `table`.
    #[must_use]
    pub fn len(&self, table: &str) -> usize {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables.get(table).map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }
}

fn matches(row: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(column, value) => row.get(*column).is_some_and(|field| match field {
            Value::String(s) => s == value,
            other => other.to_string() == *value,
        }),
        Filter::IsNull(column) => row.get(*column).is_none_or(Value::is_null),
    }
}

#[async_trait]
impl TableClient for MemoryTables {
    async fn select(&self, table: &str, filters: &[Filter]) -> Result<Vec<Value>> {
        let tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        let rows = tables.get(table).map(Vec::as_slice).unwrap_or_default();
        Ok(rows
            .iter()
            .filter(|row| filters.iter().all(|f| matches(row, f)))
            .cloned()
            .collect())
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>> {
        if self.reject_inserts.load(Ordering::Relaxed) {
            return Ok(Vec::new());
        }
        let mut row = row;
        let Value::Object(fields) = &mut row else {
            bail!("row for '{table}' must be a JSON object");
        };
        fields.entry("id").or_insert_with(|| json!(Uuid::new_v4()));
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        tables.entry(table.to_owned()).or_default().push(row.clone());
        Ok(vec![row])
    }
}
