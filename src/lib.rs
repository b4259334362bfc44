//! Car diagnostics - vehicle record validation.
//!
//! Checks one vehicle record for missing data fields, missing parts and
//! damaged parts, and reports what it finds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`diagnostics`] - Staged diagnostic engine, findings and report formatters
//! - [`error`] - Error types and result aliases
//! - [`record`] - Vehicle record model and document loading
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use car_diagnostics::diagnostics::DiagnosticEngine;
//! use car_diagnostics::record::{parse_record, RecordFormat, RequiredParts};
//! use car_diagnostics::ui::MockUI;
//!
//! let record = parse_record(
//!     r#"{"make": "Ford", "model": "Thunderbird", "parts": []}"#,
//!     RecordFormat::Json,
//!     "inline",
//! )
//! .unwrap();
//!
//! let mut ui = MockUI::new();
//! let report = DiagnosticEngine::new(RequiredParts::standard())
//!     .execute(&record, &mut ui)
//!     .unwrap();
//!
//! assert!(!report.passed());
//! assert!(ui.has_warning("Missing Data Field Detected: YEAR"));
//! ```

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod record;
pub mod ui;

pub use error::{DiagnosticsError, Result};
