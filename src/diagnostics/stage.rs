//! Diagnostic stage definitions.
//!
//! This module provides the core traits and types for defining stages:
//!
//! - [`Stage`] - The trait every validation stage implements
//! - [`StageId`] - Unique identifier for a stage
//! - [`StageOutcome`] - Pass/fail result plus findings of one stage

use super::finding::Finding;
use crate::error::Result;
use crate::record::VehicleRecord;

/// Unique identifier for a stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StageId(pub String);

impl StageId {
    /// Create a new stage ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of running one stage against a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    /// Whether the stage found nothing wrong.
    pub passed: bool,
    /// Every problem the stage found, in report order.
    pub findings: Vec<Finding>,
}

impl StageOutcome {
    /// Outcome of a stage that passes exactly when it found nothing.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            passed: findings.is_empty(),
            findings,
        }
    }

    /// A passing outcome with no findings.
    pub fn pass() -> Self {
        Self::from_findings(Vec::new())
    }
}

/// One validation step of a diagnostic run.
///
/// A stage reports every problem it finds before returning. The engine
/// decides whether later stages run.
pub trait Stage: Send + Sync {
    /// Unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Human-readable name of the stage.
    fn name(&self) -> &str;

    /// Line reported when this stage fails.
    fn failure_summary(&self) -> &str;

    /// Check the record.
    ///
    /// `Err` is reserved for contract violations; problems with the record
    /// itself are findings.
    fn check(&self, record: &VehicleRecord) -> Result<StageOutcome>;
}
