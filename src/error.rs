//! Error types for rosterdb
//!
//! Provides a unified error type for all operations.
//!
//! Soft conditions (unparseable grade tokens, rows missing required fields,
//! a roster file that does not exist yet) are deliberately NOT variants here:
//! they surface as diagnostics in [`GradeParse`](crate::grades::GradeParse)
//! and [`LoadReport`](crate::persist::LoadReport) instead of aborting the
//! enclosing operation.

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for rosterdb operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("CSV error: {0}")]
    Csv(String),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("student id already exists: {0}")]
    DuplicateId(String),

    #[error("student not found: {0}")]
    NotFound(String),
}

impl From<csv::Error> for RosterError {
    fn from(err: csv::Error) -> Self {
        // Underlying I/O problems keep their io::Error identity so callers
        // can still match on kind; everything else is a framing error.
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => RosterError::Io(io_err),
                other => RosterError::Csv(format!("{:?}", other)),
            }
        } else {
            RosterError::Csv(err.to_string())
        }
    }
}
