use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::EventType;

/// One entry of the JSON import file.
///
/// Everything is optional at the wire level; a missing title is reported
/// per record by the importer rather than failing the whole file. Unknown
/// keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub event_type: Option<EventType>,
    #[serde(default)]
    pub completion: Option<i32>,
    #[serde(default)]
    pub occurred_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_parses() {
        let record: ImportRecord = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "event_type": "ended",
            "completion": 40,
            "occurred_at": "2024-01-15T10:30:00Z"
        }))
        .unwrap();
        assert_eq!(record.title.as_deref(), Some("Dune"));
        assert_eq!(record.author.as_deref(), Some("Frank Herbert"));
        assert_eq!(record.event_type, Some(EventType::Ended));
        assert_eq!(record.completion, Some(40));
        assert!(record.occurred_at.is_some());
    }

    #[test]
    fn test_empty_object_parses() {
        let record: ImportRecord = serde_json::from_value(json!({})).unwrap();
        assert!(record.title.is_none());
        assert!(record.event_type.is_none());
    }

    #[test]
    fn test_unknown_event_type_fails_the_whole_array() {
        // Typed records are validated at parse time: one bad enum value
        // rejects the file before any record is attempted.
        let result: Result<Vec<ImportRecord>, _> = serde_json::from_value(json!([
            {"title": "Dune"},
            {"title": "Dune Messiah", "event_type": "paused"}
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let record: ImportRecord =
            serde_json::from_value(json!({"title": "Dune", "rating": 5})).unwrap();
        assert_eq!(record.title.as_deref(), Some("Dune"));
    }
}
