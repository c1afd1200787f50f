//! Gradebook: an in-memory grade record store with an audit history
//!
//! A [`Gradebook`] holds the live set of grade records and an append-only
//! log of every record that was added or deleted. The log keeps frozen
//! copies of the records it mentions, so deleting a record never erases
//! what it looked like.
//!
//! # Core Concepts
//!
//! - **Records**: [`GradeRecord`] values with store-assigned, never-reused ids
//! - **Store**: [`RecordStore`] owns live records and the current selection
//! - **History**: [`HistoryLog`] records each mutation with a timestamp
//!
//! Records are never edited in place. Changing a record means deleting it
//! and adding a new one, which gives it a new identity.
//!
//! # Example
//!
//! ```rust
//! use gradebook::{Action, Gradebook, Grade};
//!
//! let mut book = Gradebook::new();
//! let record = book
//!     .add("John Doe", "1 23456", "Math", Grade::parse("90"), "2023-05-01")
//!     .unwrap();
//!
//! book.delete(record.id).unwrap();
//!
//! assert!(book.records().is_empty());
//! assert_eq!(book.history().len(), 2);
//! assert_eq!(book.history().entries()[1].action, Action::Deleted);
//! assert_eq!(book.history().entries()[1].record, record);
//! ```

pub mod builder;
pub mod core;
mod gradebook;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, GradebookBuilder};
pub use crate::core::{Action, Clock, Grade, GradeRecord, HistoryEntry, HistoryLog, RecordId};
pub use gradebook::Gradebook;
pub use store::{RecordStore, StoreError};
