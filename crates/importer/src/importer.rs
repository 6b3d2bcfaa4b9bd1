//! Best-effort batch import of reading events.

use reading_sync_core::{EventType, ImportRecord, ReadingEvent, TableClient};
use serde::Serialize;
use tracing::info;

use crate::error::{CreationError, RecordError, RecordErrorKind};
use crate::recorder::record_event;
use crate::resolver::resolve_book;

/// Aggregated result of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub books_created: usize,
    pub events_created: usize,
    pub errors: Vec<String>,
}

/// What one successfully processed record produced.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub book_created: bool,
    pub event: ReadingEvent,
}

/// Import a batch of records for one user.
///
/// Records are processed sequentially and independently: each one folds
/// into a `Result<RecordOutcome, RecordError>`, failures are collected as
/// messages, and no failure aborts the batch. There is no transactional
/// grouping and nothing is rolled back.
pub async fn import_records(
    client: &dyn TableClient,
    user_id: &str,
    records: &[ImportRecord],
) -> ImportStats {
    let mut outcomes = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        outcomes.push(process_record(client, user_id, index, record).await);
    }
    aggregate(&outcomes)
}

async fn process_record(
    client: &dyn TableClient,
    user_id: &str,
    index: usize,
    record: &ImportRecord,
) -> Result<RecordOutcome, RecordError> {
    let Some(title) = record.title.as_deref().filter(|t| !t.is_empty()) else {
        return Err(RecordError::new(index, RecordErrorKind::MissingTitle));
    };

    let event_type = record.event_type.unwrap_or(EventType::Finished);
    let completion = record.completion.unwrap_or(event_type.default_completion());

    let resolution = resolve_book(client, user_id, title, record.author.as_deref())
        .await
        .map_err(|e| RecordError::new(index, classify(&e, title, RecordErrorKind::BookCreation)))?;

    let event = record_event(
        client,
        user_id,
        resolution.book.id,
        event_type,
        completion,
        record.occurred_at,
    )
    .await
    .map_err(|e| {
        RecordError::new(index, classify(&e, title, RecordErrorKind::EventCreation))
            .with_book_created(resolution.created)
    })?;

    info!(title, %event_type, completion, "created reading event");
    Ok(RecordOutcome { book_created: resolution.created, event })
}

/// Empty-insert failures get the stable per-title message; anything else
/// (network, decode) is recorded verbatim.
fn classify(
    error: &anyhow::Error,
    title: &str,
    creation: fn(String) -> RecordErrorKind,
) -> RecordErrorKind {
    if error.downcast_ref::<CreationError>().is_some() {
        creation(title.to_owned())
    } else {
        RecordErrorKind::Other(error.to_string())
    }
}

fn aggregate(outcomes: &[Result<RecordOutcome, RecordError>]) -> ImportStats {
    let mut stats = ImportStats::default();
    for outcome in outcomes {
        match outcome {
            Ok(outcome) => {
                stats.events_created += 1;
                if outcome.book_created {
                    stats.books_created += 1;
                }
            },
            Err(error) => {
                if error.book_created {
                    stats.books_created += 1;
                }
                stats.errors.push(error.to_string());
            },
        }
    }
    stats
}
