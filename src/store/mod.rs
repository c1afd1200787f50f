//! The live record store.
//!
//! [`RecordStore`] owns the currently-live grade records, the identifier
//! counter, and the current selection. Its mutating operations return a
//! [`MutationEvent`] describing the change instead of writing history
//! themselves; the [`Gradebook`](crate::Gradebook) forwards those events to
//! the history log.

use crate::core::{DateFormats, Grade, GradeRecord, MutationEvent, RecordId};
use tracing::debug;

pub mod error;

pub use error::StoreError;

/// Authoritative set of live grade records.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<GradeRecord>,
    next_id: u64,
    selected: Option<RecordId>,
    date_formats: DateFormats,
}

impl RecordStore {
    pub(crate) fn with_date_formats(date_formats: DateFormats) -> Self {
        Self {
            records: Vec::new(),
            next_id: 0,
            selected: None,
            date_formats,
        }
    }

    /// Commit a new record.
    ///
    /// The date is converted before anything changes; on failure the store,
    /// including the identifier counter, is untouched.
    pub(crate) fn add(
        &mut self,
        name: impl Into<String>,
        faculty_number: impl Into<String>,
        subject: impl Into<String>,
        grade: impl Into<Grade>,
        raw_date: &str,
    ) -> Result<MutationEvent, StoreError> {
        let record_date =
            self.date_formats
                .parse(raw_date)
                .map_err(|source| StoreError::InvalidDate {
                    input: raw_date.to_string(),
                    source,
                })?;

        let record = GradeRecord {
            id: RecordId(self.next_id),
            name: name.into(),
            faculty_number: faculty_number.into(),
            subject: subject.into(),
            grade: grade.into(),
            record_date,
        };
        self.next_id += 1;
        self.records.push(record.clone());

        debug!(id = %record.id, subject = %record.subject, "grade record added");
        Ok(MutationEvent::added(record))
    }

    /// Remove a live record, clearing the selection if it pointed at it.
    pub(crate) fn delete(&mut self, id: RecordId) -> Result<MutationEvent, StoreError> {
        let index = self.position(id)?;
        let record = self.records.remove(index);

        if self.selected == Some(id) {
            self.selected = None;
        }

        debug!(id = %id, "grade record deleted");
        Ok(MutationEvent::deleted(record))
    }

    /// Point the selection at a live record.
    pub(crate) fn select(&mut self, id: RecordId) -> Result<&GradeRecord, StoreError> {
        let index = self.position(id)?;
        self.selected = Some(id);
        debug!(id = %id, "grade record selected");
        Ok(&self.records[index])
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            debug!("selection cleared");
        }
    }

    fn position(&self, id: RecordId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound { id })
    }

    /// Live records in insertion order.
    pub fn records(&self) -> &[GradeRecord] {
        &self.records
    }

    /// Look up a live record by id.
    pub fn get(&self, id: RecordId) -> Option<&GradeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The currently selected record, if any.
    pub fn selected(&self) -> Option<&GradeRecord> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Id of the currently selected record, if any.
    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected
    }

    /// Identifier the next successful `add` will assign.
    pub fn next_id(&self) -> RecordId {
        RecordId(self.next_id)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no live records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date formats `add` accepts, in the order they are tried.
    pub fn date_formats(&self) -> &DateFormats {
        &self.date_formats
    }
}
