//! Insertion of reading-event rows.

use anyhow::Result;
use chrono::{DateTime, Utc};
use reading_sync_core::{
    EventType, NewReadingEvent, READING_EVENTS_TABLE, ReadingEvent, TableClient,
};
use uuid::Uuid;

use crate::error::CreationError;

/// Insert one reading event for (user, book).
///
/// `occurred_at` defaults to now. A fresh `client_event_id` is generated
/// per call, so re-importing the same file creates duplicate events.
///
/// # Errors
/// Returns an error if the backend call fails, the returned row cannot be
/// decoded, or the insert returns no rows ([`CreationError`]).
pub async fn record_event(
    client: &dyn TableClient,
    user_id: &str,
    book_id: Uuid,
    event_type: EventType,
    completion: i32,
    occurred_at: Option<DateTime<Utc>>,
) -> Result<ReadingEvent> {
    let event = NewReadingEvent {
        user_id: user_id.to_owned(),
        book_id,
        event_type,
        completion,
        occurred_at: occurred_at.unwrap_or_else(Utc::now),
        target_event_id: None,
        client_event_id: Uuid::new_v4(),
    };

    let rows = client.insert(READING_EVENTS_TABLE, serde_json::to_value(&event)?).await?;
    let Some(row) = rows.into_iter().next() else {
        return Err(CreationError { table: READING_EVENTS_TABLE }.into());
    };
    Ok(serde_json::from_value(row)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use reading_sync_supabase::MemoryTables;

    #[tokio::test]
    async fn test_occurred_at_defaults_to_now() {
        let tables = MemoryTables::new();
        let before = Utc::now();
        let event = record_event(&tables, "u1", Uuid::new_v4(), EventType::Finished, 100, None)
            .await
            .unwrap();
        assert!(event.occurred_at >= before);
        assert!(event.occurred_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_explicit_occurred_at_is_kept() {
        let tables = MemoryTables::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let event =
            record_event(&tables, "u1", Uuid::new_v4(), EventType::Ended, 50, Some(at))
                .await
                .unwrap();
        assert_eq!(event.occurred_at, at);
        assert_eq!(event.event_type, EventType::Ended);
        assert_eq!(event.completion, 50);
        assert!(event.target_event_id.is_none());
    }

    #[tokio::test]
    async fn test_client_event_id_is_fresh_per_call() {
        let tables = MemoryTables::new();
        let book_id = Uuid::new_v4();
        let first = record_event(&tables, "u1", book_id, EventType::Finished, 100, None)
            .await
            .unwrap();
        let second = record_event(&tables, "u1", book_id, EventType::Finished, 100, None)
            .await
            .unwrap();
        assert_ne!(first.client_event_id, second.client_event_id);
        assert_eq!(tables.len(READING_EVENTS_TABLE), 2);
    }

    #[tokio::test]
    async fn test_empty_insert_result_is_a_creation_error() {
        let tables = MemoryTables::new();
        tables.set_reject_inserts(true);
        let err = record_event(&tables, "u1", Uuid::new_v4(), EventType::Finished, 100, None)
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<CreationError>().is_some());
    }
}
