use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped record of progress on a book. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingEvent {
    pub id: Uuid,
    pub user_id: String,
    pub book_id: Uuid,
    pub event_type: EventType,
    /// Completion percentage, 0-100.
    pub completion: i32,
    pub occurred_at: DateTime<Utc>,
    pub target_event_id: Option<Uuid>,
    /// Client-generated token, unique per insert.
    pub client_event_id: Uuid,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Finished,
    Ended,
}

impl EventType {
    /// Completion percentage assumed when the import record omits one.
    #[must_use]
    pub const fn default_completion(self) -> i32 {
        match self {
            Self::Finished => 100,
            Self::Ended => 50,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finished => f.write_str("finished"),
            Self::Ended => f.write_str("ended"),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finished" => Ok(Self::Finished),
            "ended" => Ok(Self::Ended),
            _ => Err(anyhow::anyhow!("Invalid event type: {}", s)),
        }
    }
}

/// Insert payload for a reading event. The backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewReadingEvent {
    pub user_id: String,
    pub book_id: Uuid,
    pub event_type: EventType,
    pub completion: i32,
    pub occurred_at: DateTime<Utc>,
    pub target_event_id: Option<Uuid>,
    pub client_event_id: Uuid,
}
