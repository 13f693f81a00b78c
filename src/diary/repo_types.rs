use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub date: Date,
    /// Emoji picked for the day's mood.
    pub mood: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl DiaryEntry {
    /// Blank entry for `date`.
    pub fn draft(date: Date) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            mood: String::new(),
            content: String::new(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// Stored entries, most recently stored first, plus the entry being written.
#[derive(Debug, Clone)]
pub struct Diary {
    pub entries: Vec<DiaryEntry>,
    pub current: DiaryEntry,
}
