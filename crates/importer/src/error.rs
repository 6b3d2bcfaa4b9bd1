//! Per-record error taxonomy for the batch importer.

use thiserror::Error;

/// Backend insert accepted the request but returned no rows.
#[derive(Debug, Error)]
#[error("insert into '{table}' returned no rows")]
pub struct CreationError {
    pub table: &'static str,
}

/// A failure while processing one import record. Recorded and reported;
/// never aborts the batch.
#[derive(Debug, Error)]
#[error("Event {index}: {kind}")]
pub struct RecordError {
    pub index: usize,
    pub kind: RecordErrorKind,
    /// A book inserted before the failure still counts toward
    /// books_created; nothing is rolled back.
    pub book_created: bool,
}

impl RecordError {
    #[must_use]
    pub fn new(index: usize, kind: RecordErrorKind) -> Self {
        Self { index, kind, book_created: false }
    }

    #[must_use]
    pub fn with_book_created(mut self, created: bool) -> Self {
        self.book_created = created;
        self
    }
}

/// What went wrong with the record.
#[derive(Debug, Error)]
pub enum RecordErrorKind {
    #[error("Missing title")]
    MissingTitle,
    #[error("Failed to create book '{0}'")]
    BookCreation(String),
    #[error("Failed to create event for '{0}'")]
    EventCreation(String),
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_messages() {
        let err = RecordError::new(0, RecordErrorKind::MissingTitle);
        assert_eq!(err.to_string(), "Event 0: Missing title");

        let err = RecordError::new(3, RecordErrorKind::BookCreation("Dune".to_owned()));
        assert_eq!(err.to_string(), "Event 3: Failed to create book 'Dune'");

        let err = RecordError::new(7, RecordErrorKind::EventCreation("Dune".to_owned()));
        assert_eq!(err.to_string(), "Event 7: Failed to create event for 'Dune'");

        let err = RecordError::new(2, RecordErrorKind::Other("boom".to_owned()));
        assert_eq!(err.to_string(), "Event 2: boom");
    }

    #[test]
    fn test_book_created_defaults_to_false() {
        let err = RecordError::new(0, RecordErrorKind::MissingTitle);
        assert!(!err.book_created);
        assert!(err.with_book_created(true).book_created);
    }
}
