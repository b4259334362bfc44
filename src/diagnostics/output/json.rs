//! JSON output formatter.
//!
//! Formats diagnostic reports as machine-readable JSON for tooling
//! integration.

use serde::Serialize;

use crate::diagnostics::{DiagnosticReport, Finding};
use crate::error::{DiagnosticsError, Result};

/// Formats reports as JSON.
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    verdict: String,
    message: &'static str,
    stages: Vec<JsonStage<'a>>,
}

#[derive(Serialize)]
struct JsonStage<'a> {
    id: &'a str,
    name: &'a str,
    passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    findings: Vec<JsonFinding<'a>>,
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    message: String,
    #[serde(flatten)]
    detail: &'a Finding,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize `report`.
    pub fn format(&self, report: &DiagnosticReport) -> Result<String> {
        let verdict = report.verdict();
        let output = JsonOutput {
            verdict: verdict.to_string(),
            message: verdict.message(),
            stages: report
                .stages
                .iter()
                .map(|s| JsonStage {
                    id: &s.id.0,
                    name: &s.name,
                    passed: s.passed,
                    summary: s.summary.as_deref(),
                    findings: s
                        .findings
                        .iter()
                        .map(|f| JsonFinding {
                            message: f.to_string(),
                            detail: f,
                        })
                        .collect(),
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        };
        json.map_err(|e| DiagnosticsError::Other(e.into()))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::stages::{DataFieldsStage, PartConditionStage};
    use crate::diagnostics::{StageOutcome, StageReport};
    use crate::record::{ConditionType, Part, PartType};

    #[test]
    fn formats_passed_report() {
        let mut report = DiagnosticReport::new();
        report.push(StageReport::new(&DataFieldsStage, StageOutcome::pass()));

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter::new(false).format(&report).unwrap()).unwrap();

        assert_eq!(json["verdict"], "passed");
        assert_eq!(json["message"], "Validation has succeeded! You're good to go!");
        assert_eq!(json["stages"][0]["id"], "data-fields");
        assert_eq!(json["stages"][0]["passed"], true);
        assert!(json["stages"][0].get("summary").is_none());
    }

    #[test]
    fn formats_damaged_part_finding() {
        let part = Part::new("t-3", PartType::Tire, ConditionType::Flat);
        let mut report = DiagnosticReport::new();
        report.push(StageReport::new(
            &PartConditionStage,
            StageOutcome::from_findings(vec![Finding::damaged_part(&part).unwrap()]),
        ));

        let json: serde_json::Value =
            serde_json::from_str(&JsonFormatter::default().format(&report).unwrap()).unwrap();

        let stage = &json["stages"][0];
        assert_eq!(json["verdict"], "failed");
        assert_eq!(stage["summary"], "Parts are in bad condition.");
        assert_eq!(
            stage["findings"][0],
            serde_json::json!({
                "message": "Damaged Part Detected: TIRE - Condition: FLAT",
                "kind": "damaged_part",
                "part_type": "TIRE",
                "condition": "FLAT",
                "inventory_id": "t-3",
            })
        );
    }

    #[test]
    fn compact_output_is_single_line() {
        let output = JsonFormatter::new(false)
            .format(&DiagnosticReport::new())
            .unwrap();
        assert!(!output.contains('\n'));
    }
}
