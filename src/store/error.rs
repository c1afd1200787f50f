//! Record store error types.

use crate::core::{DateError, RecordId};
use thiserror::Error;

/// Errors returned by store operations.
///
/// Both are recoverable: a failed operation leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The date passed to `add` could not be converted to a calendar date
    #[error("invalid record date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: DateError,
    },

    /// No live record has this identifier
    #[error("no grade record with id {id}")]
    NotFound { id: RecordId },
}
