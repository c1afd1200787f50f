//! Audit history of store mutations.
//!
//! Provides an append-only, time-ordered account of every record that was
//! added to or deleted from the store.

use super::event::{Action, MutationEvent};
use super::record::{GradeRecord, RecordId};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Display format for local history timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Record of a single store mutation.
///
/// Entries are immutable values. `record` is a frozen copy of the affected
/// record, so nothing that happens to the live record later can change it.
///
/// # Example
///
/// ```rust
/// use gradebook::{Action, Gradebook};
///
/// let mut book = Gradebook::new();
/// book.add("John Doe", "1 23456", "Math", 90, "2023-05-01").unwrap();
///
/// let entry = book.history().last().unwrap();
/// assert_eq!(entry.action, Action::Added);
/// assert_eq!(entry.record.name, "John Doe");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the mutation was committed
    pub timestamp: DateTime<Utc>,
    /// What happened to the record
    pub action: Action,
    /// Snapshot of the record at the time of the mutation
    pub record: GradeRecord,
}

impl HistoryEntry {
    /// The timestamp in the local time zone, for display.
    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} {} {} {}",
            self.local_timestamp().format(TIMESTAMP_FORMAT),
            self.action,
            self.record.name,
            self.record.faculty_number,
            self.record.subject,
            self.record.grade,
        )
    }
}

/// Ordered, append-only log of history entries.
///
/// Entries can only be added by the gradebook as a consequence of a store
/// mutation; nothing removes or rewrites them. Timestamps never decrease in
/// append order: if the clock steps backwards, the new entry reuses the
/// previous entry's timestamp.
///
/// # Example
///
/// ```rust
/// use gradebook::{Action, Gradebook};
///
/// let mut book = Gradebook::new();
/// let record = book.add("Jane Roe", "2 34567", "Physics", "A", "2023-06-12").unwrap();
/// book.delete(record.id).unwrap();
///
/// let actions: Vec<Action> = book.history().entries().iter().map(|e| e.action).collect();
/// assert_eq!(actions, vec![Action::Added, Action::Deleted]);
/// ```
#[derive(Clone, Debug, Default, Serialize)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry for a store mutation.
    ///
    /// Takes an independent copy of the event's record. `now` is clamped to
    /// the previous entry's timestamp so the log stays chronologically
    /// ordered.
    pub(crate) fn append(&mut self, event: &MutationEvent, now: DateTime<Utc>) -> &HistoryEntry {
        let timestamp = match self.entries.last() {
            Some(last) if now < last.timestamp => last.timestamp,
            _ => now,
        };

        self.entries.push(HistoryEntry {
            timestamp,
            action: event.action,
            record: event.record.clone(),
        });

        &self.entries[self.entries.len() - 1]
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries concerning one record, in append order.
    ///
    /// Since identifiers are never reused, this is the full lifecycle of
    /// that record: at most one `Added` entry, followed by at most one
    /// `Deleted` entry.
    pub fn entries_for(&self, id: RecordId) -> impl Iterator<Item = &HistoryEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.record.id == id)
    }

    /// Time elapsed between the first and last entry.
    ///
    /// Returns `None` if the log is empty.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}
