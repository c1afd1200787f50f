//! Mutation events emitted by the record store.
//!
//! The store knows nothing about history; it reports what it changed and
//! the history log derives its entries from these events.

use super::record::GradeRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of mutation applied to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Added,
    Deleted,
}

impl Action {
    /// Display name of the action.
    pub fn name(&self) -> &str {
        match self {
            Self::Added => "Added",
            Self::Deleted => "Deleted",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A committed change to the store.
///
/// `record` is an owned copy of the affected record as it was at the moment
/// of the mutation.
#[derive(Clone, Debug, PartialEq)]
#[must_use = "mutation events must be forwarded to the history log"]
pub struct MutationEvent {
    pub action: Action,
    pub record: GradeRecord,
}

impl MutationEvent {
    /// Event for a record that was just added.
    pub fn added(record: GradeRecord) -> Self {
        Self {
            action: Action::Added,
            record,
        }
    }

    /// Event for a record that was just deleted.
    pub fn deleted(record: GradeRecord) -> Self {
        Self {
            action: Action::Deleted,
            record,
        }
    }
}
