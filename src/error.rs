//! Error types for diagnostic runs.
//!
//! This module defines [`DiagnosticsError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing fields, missing parts and damaged parts are *findings*, not
//!   errors. They are reported through the diagnostic report.
//! - Record loading failures use the `Record*` variants and stop the process
//!   before the engine runs.
//! - `InvalidArgument` signals a broken internal contract (a malformed deficit
//!   entry, a part with no type or condition) and aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for diagnostic operations.
#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// Record file not found at the given location.
    #[error("Record not found: {path}")]
    RecordNotFound { path: PathBuf },

    /// Record document could not be decoded.
    #[error("Failed to parse record {source_name}: {message}")]
    RecordParseError {
        source_name: String,
        message: String,
    },

    /// Record file extension does not map to a known document format.
    #[error("Unsupported record format: {path} (expected .xml, .json, .yml or .yaml)")]
    UnsupportedFormat { path: PathBuf },

    /// An internal contract was violated while evaluating or reporting.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DiagnosticsError {
    /// Shorthand for an [`DiagnosticsError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for diagnostic operations.
pub type Result<T> = std::result::Result<T, DiagnosticsError>;
