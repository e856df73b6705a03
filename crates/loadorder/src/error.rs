//! Load Order Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use spelltome_records::models::{FormKey, ModKey};
use std::path::PathBuf;

/// A load order error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for load order operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The export file could not be read.
    #[display("unable to read load order: {}", _0.display())]
    Read(#[error(not(source))] PathBuf),
    /// The export is not valid JSON, or one of its eagerly decoded records
    /// (spells, magic effects) is malformed.
    #[display("malformed load order export")]
    Malformed,
    /// The same plugin appears twice in the load order.
    #[display("plugin listed more than once: {_0}")]
    DuplicatePlugin(#[error(not(source))] ModKey),
    /// A record cannot be indexed because it has no parseable form key.
    #[display("record in {plugin} has no usable form key")]
    MissingFormKey { plugin: ModKey },
    /// A single record failed to decode; other records are unaffected.
    #[display("unable to decode record {form_key} from {plugin}")]
    Decode { plugin: ModKey, form_key: FormKey },
    /// The patch could not be written out.
    #[display("unable to write patch: {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Read(_) | Self::Write(_))
    }
}
