//! Patcher Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use spelltome_records::models::{FormKey, ModKey};

/// A patcher error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for patcher operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The load order could not provide a record.
    #[display("load order lookup failed")]
    LoadOrder,
    /// Wraps any failure while patching a single book, naming the record.
    #[display("failed to patch {form_key} (winning override from {plugin})")]
    Record { plugin: ModKey, form_key: FormKey },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            _ => false,
        }
    }
}
