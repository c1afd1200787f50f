//! The gradebook: a record store paired with its history log.

use crate::builder::GradebookBuilder;
use crate::core::{
    Clock, DateFormats, Grade, GradeRecord, HistoryLog, MutationEvent, RecordId, SystemClock,
};
use crate::store::{RecordStore, StoreError};
use std::fmt;
use tracing::debug;

/// A record store and the history of its mutations.
///
/// Every mutating call runs to completion, store change and history entry
/// alike, before returning. Callers that share a gradebook between threads
/// must serialize access (for example behind a `Mutex`).
///
/// # Example
///
/// ```rust
/// use gradebook::{Action, Gradebook, RecordId, StoreError};
///
/// let mut book = Gradebook::new();
///
/// let record = book.add("John Doe", "1 23456", "Math", 90, "2023-05-01").unwrap();
/// assert_eq!(record.id, RecordId(0));
///
/// book.select(record.id).unwrap();
/// let removed = book.delete(record.id).unwrap();
/// assert_eq!(removed, record);
/// assert!(book.selected().is_none());
///
/// assert_eq!(
///     book.select(record.id).unwrap_err(),
///     StoreError::NotFound { id: record.id }
/// );
/// assert_eq!(book.history().last().unwrap().action, Action::Deleted);
/// ```
pub struct Gradebook {
    store: RecordStore,
    history: HistoryLog,
    clock: Box<dyn Clock>,
}

impl Gradebook {
    /// Create an empty gradebook accepting ISO dates and using the system clock.
    pub fn new() -> Self {
        Self::from_parts(DateFormats::default(), Box::new(SystemClock))
    }

    /// Start configuring a gradebook.
    pub fn builder() -> GradebookBuilder {
        GradebookBuilder::new()
    }

    pub(crate) fn from_parts(date_formats: DateFormats, clock: Box<dyn Clock>) -> Self {
        Self {
            store: RecordStore::with_date_formats(date_formats),
            history: HistoryLog::new(),
            clock,
        }
    }

    /// Add a grade record.
    ///
    /// Fails with [`StoreError::InvalidDate`] if `raw_date` is not a valid
    /// date in an accepted format; nothing is recorded in that case.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        faculty_number: impl Into<String>,
        subject: impl Into<String>,
        grade: impl Into<Grade>,
        raw_date: &str,
    ) -> Result<GradeRecord, StoreError> {
        let event = self
            .store
            .add(name, faculty_number, subject, grade, raw_date)
            .inspect_err(|err| debug!(error = %err, "add rejected"))?;
        Ok(self.commit(event))
    }

    /// Delete a live record, returning it.
    pub fn delete(&mut self, id: RecordId) -> Result<GradeRecord, StoreError> {
        let event = self
            .store
            .delete(id)
            .inspect_err(|err| debug!(error = %err, "delete rejected"))?;
        Ok(self.commit(event))
    }

    /// Select a live record.
    pub fn select(&mut self, id: RecordId) -> Result<&GradeRecord, StoreError> {
        self.store.select(id)
    }

    /// Clear the selection. Always succeeds.
    pub fn clear_selection(&mut self) {
        self.store.clear_selection();
    }

    fn commit(&mut self, event: MutationEvent) -> GradeRecord {
        let timestamp = self.history.append(&event, self.clock.now()).timestamp;
        debug!(
            id = %event.record.id,
            action = %event.action,
            %timestamp,
            entries = self.history.len(),
            "history entry appended"
        );
        event.record
    }

    /// Live records in insertion order.
    pub fn records(&self) -> &[GradeRecord] {
        self.store.records()
    }

    /// The audit history, in append order.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Read-only view of the record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The currently selected record, if any.
    pub fn selected(&self) -> Option<&GradeRecord> {
        self.store.selected()
    }

    /// Look up a live record by id.
    pub fn get(&self, id: RecordId) -> Option<&GradeRecord> {
        self.store.get(id)
    }
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Gradebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gradebook")
            .field("store", &self.store)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[test]
    fn add_records_history() {
        let mut book = Gradebook::new();
        let record = book
            .add("John Doe", "1 23456", "Math", 90, "2023-05-01")
            .unwrap();

        assert_eq!(record.id, RecordId(0));
        assert_eq!(book.records(), &[record.clone()]);

        let entry = book.history().last().unwrap();
        assert_eq!(entry.action, Action::Added);
        assert_eq!(entry.record, record);
    }

    #[test]
    fn nan_grade_keeps_snapshot_equal_to_record() {
        let mut book = Gradebook::new();
        let record = book.add("A", "1", "Math", f64::NAN, "2023-05-01").unwrap();

        assert_eq!(record.grade, Grade::Text("NaN".to_string()));
        assert_eq!(book.records()[0], record);
        assert_eq!(book.history().last().unwrap().record, record);
    }

    #[test]
    fn rejected_operations_leave_history_alone() {
        let mut book = Gradebook::new();
        book.add("A", "1", "Math", 6, "2023-05-01").unwrap();

        assert!(book.add("B", "2", "Math", 6, "2023-02-31").is_err());
        assert!(book.delete(RecordId(42)).is_err());
        assert!(book.select(RecordId(42)).is_err());
        book.clear_selection();

        assert_eq!(book.history().len(), 1);
        assert_eq!(book.records().len(), 1);
    }

    #[test]
    fn selection_is_not_history() {
        let mut book = Gradebook::new();
        let record = book.add("A", "1", "Math", 6, "2023-05-01").unwrap();

        book.select(record.id).unwrap();
        book.clear_selection();

        assert_eq!(book.history().len(), 1);
    }

    #[test]
    fn get_finds_live_records_only() {
        let mut book = Gradebook::new();
        let record = book.add("A", "1", "Math", 6, "2023-05-01").unwrap();
        assert_eq!(book.get(record.id), Some(&record));

        book.delete(record.id).unwrap();
        assert!(book.get(record.id).is_none());
        assert_eq!(book.store().next_id(), RecordId(1));
    }

    #[test]
    fn debug_output_names_parts() {
        let book = Gradebook::new();
        let debug = format!("{book:?}");
        assert!(debug.contains("store"));
        assert!(debug.contains("history"));
    }
}
