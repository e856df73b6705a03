//! Application Error Types
//!
//! Anything reaching this level ends the run; per-book failures never do.

use derive_more::{Display, Error};

/// An application error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    #[display("unable to load settings")]
    Settings,
    #[display("unable to load the load order")]
    LoadOrder,
    #[display("unable to save the patch")]
    Patch,
}
