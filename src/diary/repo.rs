use std::sync::Arc;

use time::{Date, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use super::repo_types::{Diary, DiaryEntry};
use crate::clock::today;
use crate::store::Store;

#[derive(Clone)]
pub struct DiaryRepository {
    diary: Arc<Store<Diary>>,
}

impl Default for DiaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

// Entries are ordered most recently stored first, whichever way they arrive.
fn prepend(entries: &[DiaryEntry], entry: DiaryEntry) -> Vec<DiaryEntry> {
    let mut next = Vec::with_capacity(entries.len() + 1);
    next.push(entry);
    next.extend(entries.iter().cloned());
    next
}

impl DiaryRepository {
    pub fn new() -> Self {
        Self {
            diary: Arc::new(Store::new(Diary {
                entries: Vec::new(),
                current: DiaryEntry::draft(today()),
            })),
        }
    }

    pub fn entries(&self) -> Vec<DiaryEntry> {
        self.diary.with(|d| d.entries.clone())
    }

    pub fn current(&self) -> DiaryEntry {
        self.diary.with(|d| d.current.clone())
    }

    /// Edits the draft. `None` leaves a field as it is.
    pub fn update_current(&self, mood: Option<String>, content: Option<String>) -> DiaryEntry {
        self.diary.update(|d| {
            let mut current = d.current.clone();
            if let Some(mood) = mood {
                current.mood = mood;
            }
            if let Some(content) = content {
                current.content = content;
            }
            let next = Diary {
                entries: d.entries.clone(),
                current: current.clone(),
            };
            (next, current)
        })
    }

    /// Stores the draft at the head of the entries and starts a fresh one
    /// for today. Returns the stored entry.
    pub fn save_current(&self) -> DiaryEntry {
        let saved = self.diary.update(|d| {
            let mut saved = d.current.clone();
            saved.timestamp = OffsetDateTime::now_utc();

            let next = Diary {
                entries: prepend(&d.entries, saved.clone()),
                current: DiaryEntry::draft(today()),
            };
            (next, saved)
        });
        debug!(entry_id = %saved.id, date = %saved.date, "diary entry saved");
        saved
    }

    /// Stores a finished entry at the head, same as [`save_current`], and
    /// leaves the draft alone.
    ///
    /// [`save_current`]: Self::save_current
    pub fn add(&self, entry: DiaryEntry) {
        debug!(entry_id = %entry.id, date = %entry.date, "diary entry added");
        self.diary.update(|d| {
            let next = Diary {
                entries: prepend(&d.entries, entry),
                current: d.current.clone(),
            };
            (next, ())
        });
    }

    pub fn by_date(&self, date: Date) -> Vec<DiaryEntry> {
        self.diary.with(|d| {
            d.entries
                .iter()
                .filter(|e| e.date == date)
                .cloned()
                .collect()
        })
    }

    pub fn get(&self, id: Uuid) -> Option<DiaryEntry> {
        self.diary
            .with(|d| d.entries.iter().find(|e| e.id == id).cloned())
    }
}
