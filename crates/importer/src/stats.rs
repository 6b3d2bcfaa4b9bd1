//! Read-only per-user aggregates.

use anyhow::Result;
use reading_sync_core::{BOOKS_TABLE, EventType, Filter, TableClient, VALID_READING_EVENTS_VIEW};
use serde::{Deserialize, Serialize};

/// Aggregate counts for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub total_books: usize,
    pub total_events: usize,
    pub finished: usize,
    pub ended: usize,
}

/// The view may expose any columns; only the type matters here.
#[derive(Deserialize)]
struct EventTypeRow {
    event_type: EventType,
}

/// Count non-merged books and valid events for a user.
///
/// Which events are valid is decided by the backend view; this function
/// only buckets what the view returns.
pub async fn user_stats(client: &dyn TableClient, user_id: &str) -> Result<UserStats> {
    let books = client
        .select(
            BOOKS_TABLE,
            &[Filter::Eq("user_id", user_id.to_owned()), Filter::IsNull("merged_into")],
        )
        .await?;
    let events = client
        .select(VALID_READING_EVENTS_VIEW, &[Filter::Eq("user_id", user_id.to_owned())])
        .await?;

    let mut finished = 0;
    let mut ended = 0;
    for row in &events {
        let row: EventTypeRow = serde_json::from_value(row.clone())?;
        match row.event_type {
            EventType::Finished => finished += 1,
            EventType::Ended => ended += 1,
        }
    }

    Ok(UserStats { total_books: books.len(), total_events: events.len(), finished, ended })
}
