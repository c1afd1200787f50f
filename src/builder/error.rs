//! Build errors for the gradebook builder.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur when building a gradebook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No date formats configured. Keep the default or call .accept_date_format(format)")]
    NoDateFormats,

    #[error("Invalid date format {format:?}: must be well formed and name a full date")]
    InvalidDateFormat { format: String },

    #[error("Seed record {index} rejected: {source}")]
    InvalidSeed {
        index: usize,
        #[source]
        source: StoreError,
    },
}
