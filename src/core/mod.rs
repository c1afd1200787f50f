//! Core gradebook types.
//!
//! This module contains the shared data model and the audit history:
//! - Grade records and their identifiers
//! - Date conversion for raw date input
//! - Mutation events emitted by the store
//! - The append-only history log
//!
//! Nothing in this module performs I/O; the only outside input is the
//! [`Clock`] used to timestamp history entries.

mod clock;
mod date;
mod event;
mod history;
mod record;

pub use clock::{Clock, SystemClock};
pub use date::{is_valid_format, DateError, DateFormats, ISO_DATE_FORMAT};
pub use event::{Action, MutationEvent};
pub use history::{HistoryEntry, HistoryLog};
pub use record::{Grade, GradeRecord, RecordId};
