//! Vehicle diagnostics.
//!
//! A diagnostic run checks one [`VehicleRecord`](crate::record::VehicleRecord)
//! through an ordered list of stages:
//!
//! 1. **Data fields** - make, model and year are present
//! 2. **Part completeness** - the required-parts table is satisfied
//! 3. **Part condition** - every part is NEW, GOOD or WORN
//!
//! The first failing stage ends the run. Each stage reports all of its own
//! findings before that happens.
//!
//! # Example
//!
//! ```
//! use car_diagnostics::diagnostics::{DiagnosticEngine, Verdict};
//! use car_diagnostics::record::{RequiredParts, VehicleRecord};
//!
//! let engine = DiagnosticEngine::new(RequiredParts::standard());
//! let report = engine.run(&VehicleRecord::default()).unwrap();
//!
//! // An empty record fails the first stage and nothing else runs.
//! assert_eq!(report.verdict(), Verdict::Failed);
//! assert_eq!(report.stages.len(), 1);
//! assert_eq!(report.findings().count(), 3);
//! ```

pub mod engine;
pub mod finding;
pub mod output;
pub mod report;
pub mod stage;
pub mod stages;

pub use engine::DiagnosticEngine;
pub use finding::Finding;
pub use output::{HumanFormatter, JsonFormatter, OutputFormat};
pub use report::{DiagnosticReport, StageReport, Verdict, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use stage::{Stage, StageId, StageOutcome};
pub use stages::{DataFieldsStage, PartCompletenessStage, PartConditionStage};
